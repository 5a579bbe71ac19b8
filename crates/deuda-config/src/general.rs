//! General application configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Output formats understood by the CLI.
pub const OUTPUT_FORMATS: [&str; 3] = ["json", "table", "raw"];

fn default_format() -> String {
    String::from("json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Output format used when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}

impl GeneralConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if OUTPUT_FORMATS.contains(&self.default_format.as_str()) {
            return Ok(());
        }
        Err(ConfigError::InvalidValue {
            field: "general.default_format".to_string(),
            reason: format!(
                "'{}' is not one of {}",
                self.default_format,
                OUTPUT_FORMATS.join(", ")
            ),
        })
    }
}
