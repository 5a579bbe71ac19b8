//! Upstream registry API configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Public BCRA debtor registry API.
pub const DEFAULT_BASE_URL: &str = "https://api.bcra.gob.ar/centraldedeudores/v1.0";

/// Historical debts endpoint, relative to the base URL.
pub const DEFAULT_HISTORY_PATH: &str = "Deudas/Historicas";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_history_path() -> String {
    DEFAULT_HISTORY_PATH.to_string()
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("deuda/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Registry base URL, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the history endpoint; the identifier is appended to it.
    #[serde(default = "default_history_path")]
    pub history_path: String,

    /// Whole-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            history_path: default_history_path(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Full URL of the history endpoint for an identifier.
    #[must_use]
    pub fn history_url(&self, identifier: &str) -> String {
        format!(
            "{}/{}/{identifier}",
            self.base_url.trim_end_matches('/'),
            self.history_path.trim_matches('/'),
        )
    }

    /// Reject values that would make every request fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                reason: format!("'{base}' is not an http(s) URL"),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
