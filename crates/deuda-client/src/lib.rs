//! # deuda-client
//!
//! HTTP client for the BCRA "Central de Deudores" registry.
//!
//! One GET per validated identifier, no retries. Failures are classified
//! into [`LookupError`] kinds (not found, rate limited, timeout, offline,
//! unexpected payload shape, ...) so callers can show a message instead of
//! rendering an empty chart.

mod error;
mod http;
pub mod payload;

pub use error::LookupError;
pub use payload::decode_history;

use std::time::Duration;

use deuda_config::ApiConfig;
use deuda_core::{DebtorHistory, Identifier};

/// HTTP client for the debtor registry.
pub struct RegistryClient {
    http: reqwest::Client,
    api: ApiConfig,
}

impl RegistryClient {
    /// Build a client from API configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Http`] if the underlying `reqwest::Client`
    /// cannot be built (e.g. TLS backend initialization failure).
    pub fn new(api: ApiConfig) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .user_agent(api.user_agent.clone())
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()
            .map_err(LookupError::Http)?;
        Ok(Self { http, api })
    }

    #[must_use]
    pub const fn api(&self) -> &ApiConfig {
        &self.api
    }

    /// Fetch the debt history for a validated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] for error statuses, transport failures
    /// (timeout, offline) and payloads that do not have the expected shape.
    pub async fn fetch_history(&self, id: &Identifier) -> Result<DebtorHistory, LookupError> {
        let url = self.api.history_url(id.as_str());
        tracing::debug!(%url, "requesting debtor history");

        let resp = http::check_response(self.http.get(&url).send().await?).await?;
        let body = resp.text().await?;
        let history = decode_history(&body)?;

        tracing::debug!(
            periods = history.periods.len(),
            records = history.record_count(),
            "decoded debtor history"
        );
        Ok(history)
    }
}
