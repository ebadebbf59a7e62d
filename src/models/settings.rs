//! Settings Models
//!
//! Application configuration stored in config.json. The API credential is
//! never part of this file; it comes from the OPENROUTER_API_KEY environment
//! variable only.

use serde::{Deserialize, Serialize};

use pitch_writer_core::ProxyConfig;
use pitch_writer_llm::ProviderConfig;

/// Application configuration stored in config.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Bind address for the HTTP server
    pub host: String,
    /// Bind port for the HTTP server
    pub port: u16,
    /// Completion model identifier
    pub model: String,
    /// Override for the chat-completions URL; None uses the OpenRouter default
    #[serde(default)]
    pub base_url: Option<String>,
    /// Maximum tokens per completion
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// HTTP-Referer attribution header sent to OpenRouter
    #[serde(default)]
    pub referer: Option<String>,
    /// X-Title attribution header sent to OpenRouter
    #[serde(default)]
    pub title: Option<String>,
    /// Optional outbound proxy for provider requests
    #[serde(default)]
    pub proxy: Option<ProxyConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let provider = ProviderConfig::default();
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            model: provider.model,
            base_url: None,
            max_tokens: provider.max_tokens,
            temperature: provider.temperature,
            timeout_secs: provider.timeout_secs,
            referer: provider.referer,
            title: provider.title,
            proxy: None,
        }
    }
}

impl AppConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("host must not be empty".to_string());
        }

        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }

        if self.max_tokens == 0 {
            return Err("max_tokens must be at least 1".to_string());
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "Invalid temperature: {}. Must be between 0.0 and 2.0",
                self.temperature
            ));
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be at least 1".to_string());
        }

        Ok(())
    }

    /// Build the provider configuration, pairing these settings with the
    /// supplied API key.
    pub fn provider_config(&self, api_key: Option<String>) -> ProviderConfig {
        ProviderConfig {
            api_key,
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            referer: self.referer.clone(),
            title: self.title.clone(),
            timeout_secs: self.timeout_secs,
            proxy: self.proxy.clone(),
        }
    }
}
