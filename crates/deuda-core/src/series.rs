//! Per-entity series aligned on a shared period axis.
//!
//! An entity is part of the output only if it reports active debt
//! (`situation > 0`) in at least one period. For every entity and every axis
//! period there is exactly one point; a missing record or an inactive one
//! yields a gap (`value` and `situation` both `None`), never a zero.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::history::{DebtorHistory, EntityRecord};
use crate::period::Period;
use crate::situation;

/// One aligned point of a series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub period: Period,
    pub value: Option<f64>,
    pub situation: Option<i64>,
    pub under_review: bool,
    pub in_litigation: bool,
}

impl SeriesPoint {
    #[must_use]
    pub const fn gap(period: Period) -> Self {
        Self {
            period,
            value: None,
            situation: None,
            under_review: false,
            in_litigation: false,
        }
    }

    #[must_use]
    pub const fn is_gap(&self) -> bool {
        self.value.is_none()
    }
}

/// All points of one reporting entity.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySeries {
    pub name: String,
    pub points: Vec<SeriesPoint>,
}

/// Output of [`build_series`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesSet {
    /// Distinct periods, ascending.
    pub axis: Vec<Period>,
    /// Entity universe in order of first active appearance.
    pub entities: Vec<EntitySeries>,
}

/// Records of one period, deduplicated by entity name (last seen wins) while
/// keeping the position of the first occurrence.
#[derive(Default)]
struct PeriodCells<'a> {
    order: Vec<&'a EntityRecord>,
    index: HashMap<&'a str, usize>,
}

impl<'a> PeriodCells<'a> {
    fn insert(&mut self, record: &'a EntityRecord) {
        if let Some(&slot) = self.index.get(record.entity_name.as_str()) {
            self.order[slot] = record;
        } else {
            self.index
                .insert(record.entity_name.as_str(), self.order.len());
            self.order.push(record);
        }
    }

    fn get(&self, name: &str) -> Option<&'a EntityRecord> {
        self.index.get(name).map(|&slot| self.order[slot])
    }
}

/// Build the period axis and the aligned per-entity series.
#[must_use]
pub fn build_series(history: &DebtorHistory) -> SeriesSet {
    let mut cells: BTreeMap<Period, PeriodCells<'_>> = BTreeMap::new();

    for block in &history.periods {
        let period = match Period::parse(&block.period) {
            Ok(period) => period,
            Err(error) => {
                tracing::warn!(%error, "skipping malformed period");
                continue;
            }
        };
        let slot = cells.entry(period).or_default();
        for record in &block.entities {
            if situation::severity(record.situation) == situation::Severity::Unknown {
                tracing::warn!(
                    entity = %record.entity_name,
                    code = record.situation,
                    "situation code outside the defined range"
                );
            }
            slot.insert(record);
        }
    }

    let axis: Vec<Period> = cells.keys().copied().collect();

    let mut universe: Vec<&str> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for period_cells in cells.values() {
        for record in &period_cells.order {
            if situation::is_active(record.situation) && seen.insert(&record.entity_name) {
                universe.push(&record.entity_name);
            }
        }
    }

    let entities = universe
        .into_iter()
        .map(|name| EntitySeries {
            name: name.to_string(),
            points: cells
                .iter()
                .map(|(period, period_cells)| point_for(*period, period_cells.get(name)))
                .collect(),
        })
        .collect();

    SeriesSet { axis, entities }
}

fn point_for(period: Period, record: Option<&EntityRecord>) -> SeriesPoint {
    match record {
        Some(record) if situation::is_active(record.situation) => SeriesPoint {
            period,
            value: Some(record.amount),
            situation: Some(record.situation),
            under_review: record.under_review,
            in_litigation: record.in_litigation,
        },
        _ => SeriesPoint::gap(period),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::history::PeriodRecords;

    fn history(periods: Vec<PeriodRecords>) -> DebtorHistory {
        DebtorHistory {
            identification: "20123456786".to_string(),
            display_name: "TEST".to_string(),
            periods,
        }
    }

    fn values(series: &EntitySeries) -> Vec<Option<f64>> {
        series.points.iter().map(|p| p.value).collect()
    }

    #[test]
    fn axis_is_sorted_and_deduplicated() {
        let set = build_series(&history(vec![
            PeriodRecords::new("202505", vec![EntityRecord::new("A", 1, 1.0)]),
            PeriodRecords::new("202412", vec![EntityRecord::new("A", 1, 2.0)]),
            PeriodRecords::new("202505", vec![EntityRecord::new("B", 1, 3.0)]),
        ]));
        let labels: Vec<String> = set.axis.iter().map(|p| p.label()).collect();
        assert_eq!(labels, ["12/2024", "05/2025"]);
        assert_eq!(set.entities.len(), 2);
        assert_eq!(values(&set.entities[1]), vec![None, Some(3.0)]);
    }

    #[test]
    fn inactive_and_absent_records_are_gaps() {
        let set = build_series(&history(vec![
            PeriodRecords::new(
                "202503",
                vec![EntityRecord::new("A", 1, 100.0), EntityRecord::new("B", 0, 55.0)],
            ),
            PeriodRecords::new("202504", vec![EntityRecord::new("B", 2, 10.0)]),
        ]));

        let a = &set.entities[0];
        assert_eq!(a.name, "A");
        assert_eq!(values(a), vec![Some(100.0), None]);
        assert_eq!(a.points[1].situation, None);

        let b = &set.entities[1];
        assert_eq!(b.name, "B");
        // Stale amount with situation 0 is still a gap.
        assert_eq!(values(b), vec![None, Some(10.0)]);
        assert_eq!(b.points[0].situation, None);
        assert_eq!(b.points[1].situation, Some(2));
    }

    #[test]
    fn entities_without_active_debt_are_excluded() {
        let set = build_series(&history(vec![
            PeriodRecords::new(
                "202505",
                vec![EntityRecord::new("A", 1, 1.0), EntityRecord::new("ZERO", 0, 0.0)],
            ),
            PeriodRecords::new("202506", vec![EntityRecord::new("ZERO", 0, 9.0)]),
        ]));
        let names: Vec<&str> = set.entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["A"]);
        assert_eq!(set.axis.len(), 2);
    }

    #[test]
    fn last_duplicate_wins() {
        let set = build_series(&history(vec![PeriodRecords::new(
            "202505",
            vec![
                EntityRecord::new("A", 1, 1.0),
                EntityRecord::new("B", 1, 5.0),
                EntityRecord::new("A", 3, 7.0),
            ],
        )]));
        let names: Vec<&str> = set.entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(set.entities[0].points[0].value, Some(7.0));
        assert_eq!(set.entities[0].points[0].situation, Some(3));
    }

    #[test]
    fn duplicate_can_deactivate_an_entity() {
        let set = build_series(&history(vec![PeriodRecords::new(
            "202505",
            vec![EntityRecord::new("A", 1, 1.0), EntityRecord::new("A", 0, 0.0)],
        )]));
        assert!(set.entities.is_empty());
    }

    #[test]
    fn malformed_periods_are_skipped() {
        let set = build_series(&history(vec![
            PeriodRecords::new("2025-05", vec![EntityRecord::new("A", 1, 1.0)]),
            PeriodRecords::new("202513", vec![EntityRecord::new("A", 1, 1.0)]),
            PeriodRecords::new("202504", vec![EntityRecord::new("B", 1, 2.0)]),
        ]));
        assert_eq!(set.axis, vec![Period::parse("202504").unwrap()]);
        let names: Vec<&str> = set.entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["B"]);
    }

    #[test]
    fn order_follows_first_active_appearance() {
        let set = build_series(&history(vec![
            PeriodRecords::new(
                "202505",
                vec![EntityRecord::new("LATE", 1, 1.0), EntityRecord::new("EARLY", 1, 1.0)],
            ),
            PeriodRecords::new(
                "202504",
                vec![EntityRecord::new("LATE", 0, 0.0), EntityRecord::new("EARLY", 2, 1.0)],
            ),
        ]));
        let names: Vec<&str> = set.entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["EARLY", "LATE"]);
    }

    #[test]
    fn flags_travel_with_active_points() {
        let mut record = EntityRecord::new("A", 4, 10.0);
        record.under_review = true;
        record.in_litigation = true;
        let set = build_series(&history(vec![PeriodRecords::new("202505", vec![record])]));
        let point = &set.entities[0].points[0];
        assert!(point.under_review);
        assert!(point.in_litigation);
    }

    #[test]
    fn empty_history_builds_nothing() {
        let set = build_series(&history(Vec::new()));
        assert_eq!(set, SeriesSet::default());
    }
}
