//! Lookup error types.

use thiserror::Error;

/// Errors that can occur after an identifier has passed validation and a
/// lookup was sent to the registry.
#[derive(Debug, Error)]
pub enum LookupError {
    /// 404: the registry has no records for the identifier.
    #[error("no records found for identifier")]
    NotFound,

    /// 400: the registry rejected the identifier.
    #[error("registry rejected the identifier: {message}")]
    BadRequest {
        /// Response body, if any.
        message: String,
    },

    /// 429: too many requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// 5xx: the registry is unavailable.
    #[error("registry unavailable ({status})")]
    ServerError { status: u16 },

    /// The request did not finish within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The registry could not be reached at all.
    #[error("registry unreachable: {0}")]
    Offline(String),

    /// The payload is missing `results`/`periodos` or is not valid JSON.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),

    /// Any other non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Any other transport error.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),
}

impl From<reqwest::Error> for LookupError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_connect() {
            Self::Offline(error.to_string())
        } else if error.is_decode() {
            Self::UnexpectedShape(error.to_string())
        } else {
            Self::Http(error)
        }
    }
}

impl LookupError {
    /// Short message suitable for showing to the person who ran the lookup.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound => "No debts are registered for this identifier.".to_string(),
            Self::BadRequest { .. } => "The registry rejected this identifier as invalid.".to_string(),
            Self::RateLimited { retry_after_secs } => format!(
                "Too many requests. Try again in {retry_after_secs} seconds."
            ),
            Self::ServerError { .. } => {
                "The registry service is unavailable. Try again later.".to_string()
            }
            Self::Timeout => "The registry took too long to respond.".to_string(),
            Self::Offline(_) => "Could not reach the registry. Check your connection.".to_string(),
            Self::UnexpectedShape(_) => {
                "The registry returned data in an unexpected format.".to_string()
            }
            Self::Api { .. } | Self::Http(_) => "The lookup failed.".to_string(),
        }
    }
}
