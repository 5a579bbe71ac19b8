use std::sync::Arc;

use deuda_client::RegistryClient;
use deuda_config::DeudaConfig;

/// Shared handles for command handlers.
pub struct AppContext {
    pub registry: Arc<RegistryClient>,
}

impl AppContext {
    pub fn init(config: DeudaConfig) -> anyhow::Result<Self> {
        let registry = RegistryClient::new(config.api)?;
        tracing::debug!(base_url = %registry.api().base_url, "registry client ready");
        Ok(Self {
            registry: Arc::new(registry),
        })
    }
}
