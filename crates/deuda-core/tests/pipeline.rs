//! End-to-end pipeline scenarios: validated identifier → history → chart.

use deuda_core::chart::{ChartData, TOTAL_NAME};
use deuda_core::identifier;
use deuda_core::{DebtorHistory, EntityRecord, PeriodRecords, build_chart};
use pretty_assertions::assert_eq;

const BANK_A: &str = "BANCO SANTANDER ARGENTINA S.A.";
const BANK_B: &str = "BANCO GALICIA";
const BANK_C: &str = "BBVA";

fn two_period_history() -> DebtorHistory {
    DebtorHistory {
        identification: "20123456786".to_string(),
        display_name: "EMPRESA DE EJEMPLO S.A.".to_string(),
        periods: vec![
            PeriodRecords::new(
                "202505",
                vec![
                    EntityRecord::new(BANK_A, 1, 866.0),
                    EntityRecord::new(BANK_B, 1, 1500.0),
                ],
            ),
            PeriodRecords::new(
                "202504",
                vec![
                    EntityRecord::new(BANK_A, 1, 1202.0),
                    EntityRecord::new(BANK_B, 1, 1300.0),
                    EntityRecord::new(BANK_C, 1, 400.0),
                ],
            ),
        ],
    }
}

fn values(chart: &ChartData, name: &str) -> Vec<Option<f64>> {
    chart
        .series
        .iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("series {name} missing"))
        .points
        .iter()
        .map(|p| p.value)
        .collect()
}

/// Validate a JSON value against the published chart schema.
fn schema_errors(instance: &serde_json::Value) -> Vec<String> {
    let schema = ChartData::json_schema();
    let validator = jsonschema::validator_for(&schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

#[test]
fn two_period_scenario() {
    let id = identifier::validate("20-12345678-6").expect("fixture identifier is valid");
    let history = two_period_history();
    assert_eq!(history.identification, id.as_str());

    let chart = build_chart(&history);

    assert_eq!(chart.period_axis, vec!["04/2025", "05/2025"]);
    assert_eq!(values(&chart, BANK_A), vec![Some(1202.0), Some(866.0)]);
    assert_eq!(values(&chart, BANK_B), vec![Some(1300.0), Some(1500.0)]);
    assert_eq!(values(&chart, BANK_C), vec![Some(400.0), None]);

    // 1202 + 1300 + 400 with three active; 866 + 1500 with two active.
    assert_eq!(values(&chart, TOTAL_NAME), vec![Some(2902.0), Some(2366.0)]);

    let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec![BANK_A, BANK_B, BANK_C, TOTAL_NAME]);
    assert!(chart.series.iter().all(|s| s.points.len() == chart.period_axis.len()));
}

#[test]
fn sample_history_with_inactive_entities() {
    let history = DebtorHistory {
        identification: "20123456786".to_string(),
        display_name: "EMPRESA DE EJEMPLO S.A.".to_string(),
        periods: vec![
            PeriodRecords::new(
                "202506",
                vec![
                    EntityRecord::new(BANK_A, 1, 2000.0),
                    EntityRecord::new(BANK_B, 0, 0.0),
                    EntityRecord::new(BANK_C, 0, 0.0),
                ],
            ),
            PeriodRecords::new(
                "202503",
                vec![
                    EntityRecord::new(BANK_A, 1, 1567.0),
                    EntityRecord::new(BANK_B, 0, 0.0),
                    EntityRecord::new(BANK_C, 1, 300.0),
                ],
            ),
            PeriodRecords::new(
                "202505",
                vec![
                    EntityRecord::new(BANK_A, 1, 866.0),
                    EntityRecord::new(BANK_B, 1, 1500.0),
                    EntityRecord::new(BANK_C, 0, 0.0),
                ],
            ),
            PeriodRecords::new("202504", vec![EntityRecord::new("NEVER ACTIVE", 0, 10.0)]),
        ],
    };

    let chart = build_chart(&history);
    assert_eq!(
        chart.period_axis,
        vec!["03/2025", "04/2025", "05/2025", "06/2025"]
    );
    assert!(chart.series.iter().all(|s| s.name != "NEVER ACTIVE"));
    assert_eq!(
        values(&chart, BANK_C),
        vec![Some(300.0), None, None, None]
    );
    assert_eq!(
        values(&chart, TOTAL_NAME),
        vec![Some(1867.0), None, Some(2366.0), None]
    );
}

#[test]
fn single_entity_history_has_no_total() {
    let history = DebtorHistory {
        identification: "20123456786".to_string(),
        display_name: "SOLO".to_string(),
        periods: vec![
            PeriodRecords::new("202504", vec![EntityRecord::new(BANK_A, 2, 10.0)]),
            PeriodRecords::new("202505", vec![EntityRecord::new(BANK_A, 3, 20.0)]),
        ],
    };
    let chart = build_chart(&history);
    assert!(chart.total().is_none());
    assert_eq!(chart.series.len(), 1);
}

#[test]
fn chart_json_matches_schema() {
    let chart = build_chart(&two_period_history());
    let instance = serde_json::to_value(&chart).unwrap();
    let errors = schema_errors(&instance);
    assert!(errors.is_empty(), "schema errors: {errors:?}");

    let mut renamed = instance.clone();
    let axis = renamed
        .as_object_mut()
        .and_then(|object| object.remove("periodAxis"))
        .expect("periodAxis present");
    renamed["period_axis"] = axis;
    assert!(!schema_errors(&renamed).is_empty());

    let back: ChartData = serde_json::from_value(instance).unwrap();
    assert_eq!(back, chart);
}

#[test]
fn rebuilding_is_deterministic() {
    let history = two_period_history();
    assert_eq!(build_chart(&history), build_chart(&history));
}

fn sorted_keys(value: &serde_json::Value) -> Vec<&str> {
    let mut keys: Vec<&str> = value
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    keys
}

#[test]
fn chart_json_uses_camel_case_names() {
    let json = serde_json::to_value(build_chart(&two_period_history())).unwrap();

    assert_eq!(
        sorted_keys(&json),
        vec!["displayName", "identification", "periodAxis", "series"]
    );
    assert_eq!(json["periodAxis"], serde_json::json!(["04/2025", "05/2025"]));

    let total = &json["series"][3];
    assert_eq!(
        sorted_keys(total),
        vec!["color", "isTotal", "name", "points", "spanGaps"]
    );
    assert_eq!(total["isTotal"], true);
    assert_eq!(total["spanGaps"], false);
    assert_eq!(
        sorted_keys(&total["points"][0]),
        vec!["inLitigation", "situation", "underReview", "value"]
    );
    assert_eq!(json["series"][2]["points"][1]["value"], serde_json::Value::Null);
}
