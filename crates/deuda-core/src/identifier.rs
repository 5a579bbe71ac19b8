//! Tax identifier (CUIT/CUIL) cleaning, display formatting and validation.
//!
//! Input is free-form text as typed or pasted by a user. [`clean`] keeps only
//! ASCII digits and caps the result at 11 so that over-long pastes truncate
//! instead of failing. [`validate`] is the gate in front of every upstream
//! lookup: nothing that fails it is ever sent over the network.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Number of digits in a complete identifier.
pub const LEN: usize = 11;

/// Check digit weights applied to the first ten digits, left to right.
pub const WEIGHTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Strip every non-digit character and cap the result at [`LEN`] digits.
#[must_use]
pub fn clean(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(LEN)
        .collect()
}

/// Clean `input` and insert display separators.
///
/// - 0–2 digits: unseparated
/// - 3–10 digits: `DD-REST`
/// - 11 digits: `DD-DDDDDDDD-D`
#[must_use]
pub fn format(input: &str) -> String {
    let digits = clean(input);
    match digits.len() {
        0..=2 => digits,
        3..=10 => format!("{}-{}", &digits[..2], &digits[2..]),
        _ => format!("{}-{}-{}", &digits[..2], &digits[2..10], &digits[10..]),
    }
}

/// Compute the mod-11 check digit for the first ten digits.
///
/// `11` normalizes to `0` and `10` normalizes to `9`.
#[must_use]
pub fn check_digit(first_ten: &[u8; 10]) -> u8 {
    let sum: u32 = first_ten
        .iter()
        .zip(WEIGHTS)
        .map(|(digit, weight)| u32::from(*digit) * weight)
        .sum();
    match 11 - (sum % 11) {
        11 => 0,
        10 => 9,
        // Always < 10 here.
        expected => u8::try_from(expected).unwrap_or(0),
    }
}

/// Verify the check digit of an 11-digit string.
///
/// Returns `false` for anything that is not exactly 11 ASCII digits; no
/// cleaning is applied.
#[must_use]
pub fn is_valid_check_digit(eleven_digits: &str) -> bool {
    let bytes = eleven_digits.as_bytes();
    if bytes.len() != LEN || !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }

    let mut first_ten = [0u8; 10];
    for (slot, byte) in first_ten.iter_mut().zip(bytes) {
        *slot = byte - b'0';
    }
    check_digit(&first_ten) == bytes[10] - b'0'
}

/// Clean raw input and validate it as a complete identifier.
///
/// # Errors
///
/// [`ValidationError::WrongLength`] unless exactly 11 digits remain after
/// cleaning, [`ValidationError::BadCheckDigit`] if the check digit fails.
pub fn validate(raw: &str) -> Result<Identifier, ValidationError> {
    let digits = clean(raw);
    if digits.len() != LEN {
        return Err(ValidationError::WrongLength {
            digits: digits.len(),
        });
    }
    if !is_valid_check_digit(&digits) {
        return Err(ValidationError::BadCheckDigit);
    }
    Ok(Identifier(digits))
}

/// A validated 11-digit tax identifier.
///
/// Serializes as the bare digit string. Deserialization runs [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// The 11 digits, without separators.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `AA-BBBBBBBB-C` display form.
    #[must_use]
    pub fn display(&self) -> String {
        format(&self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl FromStr for Identifier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

impl TryFrom<String> for Identifier {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(&value)
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.0
    }
}
