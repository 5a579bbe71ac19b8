//! Registry wire format and its mapping onto [`DebtorHistory`].
//!
//! ```json
//! { "status": 200,
//!   "results": { "identificacion": 20123456786, "denominacion": "...",
//!                "periodos": [ { "periodo": "202504",
//!                                "entidades": [ { "entidad": "...", "situacion": 1,
//!                                                 "monto": 1202.0, "enRevision": false,
//!                                                 "procesoJud": false } ] } ] } }
//! ```
//!
//! `results` and `periodos` are required; a payload without them is an
//! [`LookupError::UnexpectedShape`], not an empty history. Inside a period the
//! registry is not strict about fields, so missing or `null` values fall back
//! to empty or zero.

use deuda_core::{DebtorHistory, EntityRecord, PeriodRecords};
use serde::Deserialize;
use serde_json::Value;

use crate::error::LookupError;

#[derive(Deserialize)]
struct Envelope {
    results: Option<Results>,
}

#[derive(Deserialize)]
struct Results {
    #[serde(default)]
    identificacion: Value,
    #[serde(default)]
    denominacion: Option<String>,
    periodos: Option<Vec<Periodo>>,
}

#[derive(Deserialize)]
struct Periodo {
    #[serde(default)]
    periodo: Value,
    #[serde(default)]
    entidades: Option<Vec<Entidad>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Entidad {
    #[serde(default)]
    entidad: Option<String>,
    #[serde(default)]
    situacion: Option<i64>,
    #[serde(default)]
    monto: Option<f64>,
    #[serde(default)]
    en_revision: Option<bool>,
    #[serde(default)]
    proceso_jud: Option<bool>,
}

/// Numbers and strings both show up for identifiers and period tokens.
fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

/// Decode a registry response body.
///
/// # Errors
///
/// [`LookupError::UnexpectedShape`] if the body is not JSON or lacks
/// `results` / `results.periodos`.
pub fn decode_history(body: &str) -> Result<DebtorHistory, LookupError> {
    let envelope: Envelope = serde_json::from_str(body)
        .map_err(|e| LookupError::UnexpectedShape(format!("invalid JSON: {e}")))?;

    let results = envelope
        .results
        .ok_or_else(|| LookupError::UnexpectedShape("missing 'results'".to_string()))?;
    let periodos = results
        .periodos
        .ok_or_else(|| LookupError::UnexpectedShape("missing 'results.periodos'".to_string()))?;

    Ok(DebtorHistory {
        identification: scalar_to_string(&results.identificacion),
        display_name: results.denominacion.unwrap_or_default().trim().to_string(),
        periods: periodos
            .into_iter()
            .map(|p| PeriodRecords {
                period: scalar_to_string(&p.periodo),
                entities: p
                    .entidades
                    .unwrap_or_default()
                    .into_iter()
                    .map(|e| EntityRecord {
                        entity_name: e.entidad.unwrap_or_default().trim().to_string(),
                        situation: e.situacion.unwrap_or_default(),
                        amount: e.monto.unwrap_or_default(),
                        under_review: e.en_revision.unwrap_or_default(),
                        in_litigation: e.proceso_jud.unwrap_or_default(),
                    })
                    .collect(),
            })
            .collect(),
    })
}
