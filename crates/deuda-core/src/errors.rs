//! Error types for the pure pipeline.
//!
//! Upstream lookup failures are defined in `deuda-client`; the binary is where
//! all crate errors converge.

use thiserror::Error;

/// Identifier rejected before any network call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Input did not contain exactly 11 digits after cleaning.
    #[error("identifier must have 11 digits, got {digits}")]
    WrongLength { digits: usize },

    /// The 11th digit does not match the mod-11 check digit.
    #[error("identifier check digit does not match")]
    BadCheckDigit,
}

/// A period token that is not a well-formed `YYYYMM` value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    #[error("period '{0}' is not six digits")]
    Shape(String),

    #[error("period '{token}' has month {month} outside 01-12")]
    Month { token: String, month: u32 },
}
