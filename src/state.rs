//! Application State
//!
//! Shared state handed to the axum router: the loaded configuration plus the
//! configured completion provider behind its trait object.

use std::sync::Arc;

use pitch_writer_llm::{CompletionProvider, OpenRouterProvider};

use crate::models::settings::AppConfig;
use crate::storage::ConfigService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
    provider: Arc<dyn CompletionProvider>,
}

impl AppState {
    /// Build the state from the loaded configuration.
    ///
    /// The API key is resolved from the environment here, once. A missing key
    /// does not prevent startup (the health route stays useful), but every
    /// completion call will fail fast with an authentication error.
    pub fn new(config: AppConfig) -> Self {
        let api_key = ConfigService::api_key();
        if api_key.is_none() {
            tracing::warn!(
                "OPENROUTER_API_KEY is not set; completion requests will be rejected"
            );
        }

        let provider = OpenRouterProvider::new(config.provider_config(api_key));

        Self {
            config: Arc::new(config),
            provider: Arc::new(provider),
        }
    }

    /// Build the state around an explicit provider. Used by tests to inject
    /// stub providers.
    pub fn with_provider(config: AppConfig, provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            config: Arc::new(config),
            provider,
        }
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the completion provider
    pub fn provider(&self) -> Arc<dyn CompletionProvider> {
        Arc::clone(&self.provider)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("provider", &self.provider.name())
            .field("model", &self.provider.model())
            .finish()
    }
}
