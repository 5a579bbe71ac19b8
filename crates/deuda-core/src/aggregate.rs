//! Synthetic total across entities.
//!
//! A period's total is only meaningful when more than one entity carries
//! active debt in it. With zero or one active entity the total point is a gap:
//! a "total" equal to a single entity's own line carries no information.

use crate::series::{SeriesPoint, SeriesSet};

/// Minimum number of active entities for a period total to be emitted.
pub const MIN_ACTIVE_FOR_TOTAL: usize = 2;

/// Compute one total point per axis period.
///
/// The point's `situation` is the worst active situation in that period.
#[must_use]
pub fn total_points(set: &SeriesSet) -> Vec<SeriesPoint> {
    set.axis
        .iter()
        .enumerate()
        .map(|(index, period)| {
            let active: Vec<&SeriesPoint> = set
                .entities
                .iter()
                .filter_map(|entity| entity.points.get(index))
                .filter(|point| !point.is_gap())
                .collect();

            if active.len() < MIN_ACTIVE_FOR_TOTAL {
                return SeriesPoint::gap(*period);
            }

            SeriesPoint {
                period: *period,
                value: Some(active.iter().filter_map(|p| p.value).sum()),
                situation: active.iter().filter_map(|p| p.situation).max(),
                under_review: active.iter().any(|p| p.under_review),
                in_litigation: active.iter().any(|p| p.in_litigation),
            }
        })
        .collect()
}

/// Total series, or `None` when every period is suppressed.
#[must_use]
pub fn total_series(set: &SeriesSet) -> Option<Vec<SeriesPoint>> {
    let points = total_points(set);
    points.iter().any(|p| !p.is_gap()).then_some(points)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::history::{DebtorHistory, EntityRecord, PeriodRecords};
    use crate::series::build_series;

    fn set(periods: Vec<PeriodRecords>) -> SeriesSet {
        build_series(&DebtorHistory {
            identification: "20123456786".to_string(),
            display_name: "TEST".to_string(),
            periods,
        })
    }

    #[test]
    fn single_active_entity_suppresses_total() {
        let set = set(vec![
            PeriodRecords::new(
                "202503",
                vec![EntityRecord::new("A", 1, 100.0), EntityRecord::new("B", 0, 50.0)],
            ),
            PeriodRecords::new(
                "202504",
                vec![EntityRecord::new("A", 1, 100.0), EntityRecord::new("B", 2, 50.0)],
            ),
        ]);
        let totals: Vec<Option<f64>> = total_points(&set).iter().map(|p| p.value).collect();
        assert_eq!(totals, vec![None, Some(150.0)]);
    }

    #[test]
    fn total_takes_worst_situation_and_any_flag() {
        let mut litigated = EntityRecord::new("B", 4, 2.5);
        litigated.in_litigation = true;
        let set = set(vec![PeriodRecords::new(
            "202504",
            vec![EntityRecord::new("A", 1, 1.5), litigated],
        )]);
        let points = total_points(&set);
        assert_eq!(points[0].value, Some(4.0));
        assert_eq!(points[0].situation, Some(4));
        assert!(points[0].in_litigation);
        assert!(!points[0].under_review);
    }

    #[test]
    fn all_suppressed_means_no_total_series() {
        let set = set(vec![
            PeriodRecords::new("202503", vec![EntityRecord::new("A", 1, 100.0)]),
            PeriodRecords::new("202504", vec![EntityRecord::new("B", 1, 100.0)]),
        ]);
        assert!(total_series(&set).is_none());
        assert!(total_series(&SeriesSet::default()).is_none());
    }
}
