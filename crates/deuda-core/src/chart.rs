//! Chart-ready output handed to the rendering collaborator.
//!
//! Every series has exactly one point per entry of `periodAxis`. A `null`
//! point is a gap: renderers must neither plot it as zero nor draw a line
//! across it, which every series states explicitly with `spanGaps: false`.
//! Field names are camelCase on the wire.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::aggregate;
use crate::history::DebtorHistory;
use crate::palette;
use crate::series::{SeriesPoint, build_series};

/// Name of the synthetic total series.
pub const TOTAL_NAME: &str = "TOTAL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub value: Option<f64>,
    pub situation: Option<i64>,
    #[serde(default)]
    pub under_review: bool,
    #[serde(default)]
    pub in_litigation: bool,
}

impl From<&SeriesPoint> for ChartPoint {
    fn from(point: &SeriesPoint) -> Self {
        Self {
            value: point.value,
            situation: point.situation,
            under_review: point.under_review,
            in_litigation: point.in_litigation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub name: String,
    /// Set only on the synthetic total; styled with a reserved color.
    pub is_total: bool,
    pub color: String,
    /// Always `false`: gaps are never bridged.
    pub span_gaps: bool,
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub identification: String,
    pub display_name: String,
    /// `MM/YYYY` labels, chronological.
    pub period_axis: Vec<String>,
    /// Entity series first, then the total (if any).
    pub series: Vec<ChartSeries>,
}

impl ChartData {
    /// JSON Schema describing the chart output.
    #[must_use]
    pub fn json_schema() -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(Self)).unwrap_or_default()
    }

    pub fn entity_series(&self) -> impl Iterator<Item = &ChartSeries> {
        self.series.iter().filter(|s| !s.is_total)
    }

    #[must_use]
    pub fn total(&self) -> Option<&ChartSeries> {
        self.series.iter().find(|s| s.is_total)
    }
}

fn to_points(points: &[SeriesPoint]) -> Vec<ChartPoint> {
    points.iter().map(ChartPoint::from).collect()
}

/// Run the full pipeline over a history: series, total, colors, labels.
#[must_use]
pub fn build_chart(history: &DebtorHistory) -> ChartData {
    let set = build_series(history);

    let mut series: Vec<ChartSeries> = set
        .entities
        .iter()
        .enumerate()
        .map(|(index, entity)| ChartSeries {
            name: entity.name.clone(),
            is_total: false,
            color: palette::entity_color(index, &entity.name),
            span_gaps: false,
            points: to_points(&entity.points),
        })
        .collect();

    if let Some(total) = aggregate::total_series(&set) {
        series.push(ChartSeries {
            name: TOTAL_NAME.to_string(),
            is_total: true,
            color: palette::TOTAL_COLOR.to_string(),
            span_gaps: false,
            points: to_points(&total),
        });
    }

    tracing::debug!(
        periods = set.axis.len(),
        series = series.len(),
        "built chart"
    );

    ChartData {
        identification: history.identification.clone(),
        display_name: history.display_name.clone(),
        period_axis: set.axis.iter().map(|p| p.label()).collect(),
        series,
    }
}
