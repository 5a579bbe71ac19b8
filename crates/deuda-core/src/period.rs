//! Year-month reporting periods.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::PeriodError;

/// A `YYYYMM` reporting bucket, ordered by its numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period(u32);

impl Period {
    /// Parse a six-digit `YYYYMM` token.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError`] when the token is not six ASCII digits or the
    /// month is outside `01..=12`.
    pub fn parse(token: &str) -> Result<Self, PeriodError> {
        let token = token.trim();
        if token.len() != 6 || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PeriodError::Shape(token.to_string()));
        }
        let value: u32 = token
            .parse()
            .map_err(|_| PeriodError::Shape(token.to_string()))?;
        let month = value % 100;
        if !(1..=12).contains(&month) {
            return Err(PeriodError::Month {
                token: token.to_string(),
                month,
            });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn year(self) -> u32 {
        self.0 / 100
    }

    #[must_use]
    pub const fn month(self) -> u32 {
        self.0 % 100
    }

    /// The `YYYYMM` token.
    #[must_use]
    pub fn token(self) -> String {
        format!("{:06}", self.0)
    }

    /// The `MM/YYYY` display label.
    #[must_use]
    pub fn label(self) -> String {
        format!("{:02}/{:04}", self.month(), self.year())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Period {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Period {
    type Error = PeriodError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Period> for String {
    fn from(value: Period) -> Self {
        value.token()
    }
}
