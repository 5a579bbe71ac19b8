//! # deuda-config
//!
//! Layered configuration loading for deuda using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DEUDA_*` prefix, `__` as separator)
//! 2. Project-level `.deuda/config.toml`
//! 3. User-level `~/.config/deuda/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DEUDA_API__BASE_URL` -> `api.base_url`,
//! `DEUDA_GENERAL__DEFAULT_FORMAT` -> `general.default_format`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use deuda_config::DeudaConfig;
//!
//! deuda_config::load_dotenv();
//! let config = DeudaConfig::load().expect("config");
//! println!("registry: {}", config.api.base_url);
//! ```

mod api;
mod error;
mod general;

pub use api::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_HISTORY_PATH};
pub use error::ConfigError;
pub use general::{GeneralConfig, OUTPUT_FORMATS};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "DEUDA_";

/// Read `.env` from the current directory into the process environment.
pub fn load_dotenv() {
    // A missing .env is not an error.
    let _ = dotenvy::dotenv();
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeudaConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl DeudaConfig {
    /// Load and validate configuration from TOML files and environment.
    ///
    /// Does NOT call `dotenvy` -- call [`load_dotenv`] first for `.env`
    /// file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load and validate only the `[general]` table.
    ///
    /// Commands that never reach the registry use this, so a broken `[api]`
    /// section only fails the commands that need it.
    pub fn load_general() -> Result<GeneralConfig, ConfigError> {
        Self::general_from_figment(&Self::figment())
    }

    pub fn general_from_figment(figment: &Figment) -> Result<GeneralConfig, ConfigError> {
        let general: GeneralConfig = figment.extract_inner("general")?;
        general.validate()?;
        Ok(general)
    }

    /// Extract and validate from an arbitrary figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.general.validate()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".deuda/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("deuda").join("config.toml"))
    }
}
