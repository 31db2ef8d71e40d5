use std::sync::Arc;

use crate::config::Settings;
use crate::provider::ProviderClient;

/// Shared application state, built once at startup and cloned into each
/// request handler. Everything inside is read-only; requests share nothing
/// mutable.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub provider: Arc<ProviderClient>,
}

impl AppState {
    pub fn new(config: Settings) -> Self {
        let provider = Arc::new(ProviderClient::new(&config.translator));
        Self {
            config: Arc::new(config),
            provider,
        }
    }
}
