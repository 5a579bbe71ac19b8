//! Situation code classification.
//!
//! The registry reports an integer risk code per entity and period. Codes
//! `0..=6` are defined; anything else is classified as [`Severity::Unknown`]
//! and gets a neutral color, since the upstream source is not contractually
//! bounded to that range.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Code meaning "no active debt". Points with this code are gaps.
pub const NO_DEBT: i64 = 0;

/// Severity tier of a situation code.
///
/// ```text
/// none < low < low_medium < medium < high
/// ```
///
/// `Unknown` sits outside the ordering chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    None,
    Low,
    LowMedium,
    Medium,
    High,
    Unknown,
}

impl Severity {
    /// Position on the severity ramp; `None` for [`Severity::Unknown`].
    #[must_use]
    pub const fn rank(self) -> Option<u8> {
        match self {
            Self::None => Some(0),
            Self::Low => Some(1),
            Self::LowMedium => Some(2),
            Self::Medium => Some(3),
            Self::High => Some(4),
            Self::Unknown => None,
        }
    }

    /// Display color for this tier. Warmer as severity increases.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::None => "#9e9e9e",
            Self::Low => "#4caf50",
            Self::LowMedium => "#ffc107",
            Self::Medium => "#ff9800",
            Self::High => "#f44336",
            Self::Unknown => "#607d8b",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::LowMedium => "low_medium",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label, tier and color for one situation code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Classification {
    pub code: i64,
    pub label: String,
    pub severity: Severity,
    pub color: String,
}

/// Human label for a situation code.
#[must_use]
pub const fn label(code: i64) -> &'static str {
    match code {
        0 => "no debt",
        1 => "normal",
        2 => "under watch",
        3 => "troubled",
        4 => "prejudicial-unrecoverable",
        5 => "technically unrecoverable",
        6 => "technically unrecoverable (alt.)",
        _ => "unknown",
    }
}

/// Severity tier for a situation code.
#[must_use]
pub const fn severity(code: i64) -> Severity {
    match code {
        0 => Severity::None,
        1 => Severity::Low,
        2 => Severity::LowMedium,
        3 => Severity::Medium,
        4..=6 => Severity::High,
        _ => Severity::Unknown,
    }
}

/// Classify a situation code. Total over all integers.
#[must_use]
pub fn classify(code: i64) -> Classification {
    let severity = severity(code);
    Classification {
        code,
        label: label(code).to_string(),
        severity,
        color: severity.color().to_string(),
    }
}

/// Whether a code marks an entity as carrying active debt.
#[must_use]
pub const fn is_active(code: i64) -> bool {
    code > NO_DEBT
}
