//! # deuda-core
//!
//! Identifier validation and time-series normalization for debtor histories.
//!
//! This crate is pure: no I/O, no shared mutable state. It provides:
//! - Tax identifier cleaning, formatting and mod-11 check digit validation
//! - Year-month period parsing and ordering
//! - Situation code classification (label, severity, color)
//! - The debtor history model decoded from the upstream registry
//! - Per-entity series building with explicit gaps
//! - Total aggregation with single-entity suppression
//! - Deterministic series coloring
//! - Chart-ready output with a published JSON Schema
//! - Owned lookup session state (input, busy flag, last outcome)

pub mod aggregate;
pub mod chart;
pub mod errors;
pub mod history;
pub mod identifier;
pub mod palette;
pub mod period;
pub mod series;
pub mod session;
pub mod situation;

pub use chart::{ChartData, ChartPoint, ChartSeries, build_chart};
pub use errors::{PeriodError, ValidationError};
pub use history::{DebtorHistory, EntityRecord, PeriodRecords};
pub use identifier::Identifier;
pub use period::Period;
