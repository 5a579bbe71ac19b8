//! Debtor history as reported by the registry.
//!
//! Period tokens are kept raw here. They are parsed (and malformed ones
//! skipped) when series are built, so a single bad period never prevents the
//! rest of a history from rendering.

use serde::{Deserialize, Serialize};

/// One entity's report for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub entity_name: String,
    pub situation: i64,
    pub amount: f64,
    #[serde(default)]
    pub under_review: bool,
    #[serde(default)]
    pub in_litigation: bool,
}

impl EntityRecord {
    #[must_use]
    pub fn new(entity_name: impl Into<String>, situation: i64, amount: f64) -> Self {
        Self {
            entity_name: entity_name.into(),
            situation,
            amount,
            under_review: false,
            in_litigation: false,
        }
    }
}

/// All entity reports for one `YYYYMM` period token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRecords {
    pub period: String,
    pub entities: Vec<EntityRecord>,
}

impl PeriodRecords {
    #[must_use]
    pub fn new(period: impl Into<String>, entities: Vec<EntityRecord>) -> Self {
        Self {
            period: period.into(),
            entities,
        }
    }
}

/// The full history returned for one identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtorHistory {
    /// Identifier as echoed by the registry (not re-validated).
    pub identification: String,
    pub display_name: String,
    pub periods: Vec<PeriodRecords>,
}

impl DebtorHistory {
    /// Total number of entity records across every period.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.periods.iter().map(|p| p.entities.len()).sum()
    }
}
