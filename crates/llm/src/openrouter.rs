//! OpenRouter Provider
//!
//! Implementation of the CompletionProvider trait for OpenRouter's
//! OpenAI-compatible chat-completions API. OpenRouter additionally accepts
//! the `HTTP-Referer` and `X-Title` headers for request attribution.

use std::time::Duration;

use async_trait::async_trait;
use pitch_writer_core::GENERATION_FAILED;
use serde::Deserialize;

use super::http_client::build_http_client;
use super::provider::{missing_api_key_error, parse_http_error, CompletionProvider};
use super::types::{CompletionError, CompletionReply, CompletionResult, ProviderConfig};

/// Default OpenRouter chat-completions endpoint
const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Model-listing endpoint used to validate the API key
const OPENROUTER_MODELS_URL: &str = "https://openrouter.ai/api/v1/models";

/// OpenRouter provider
pub struct OpenRouterProvider {
    config: ProviderConfig,
    client: reqwest::Client,
}

impl OpenRouterProvider {
    /// Create a new OpenRouter provider with the given configuration
    pub fn new(config: ProviderConfig) -> Self {
        let client = build_http_client(
            Duration::from_secs(config.timeout_secs),
            config.proxy.as_ref(),
        );
        Self { config, client }
    }

    /// Get the API base URL
    fn base_url(&self) -> &str {
        self.config.base_url.as_deref().unwrap_or(OPENROUTER_API_URL)
    }

    /// Build the request body: a single-message conversation carrying the
    /// assembled prompt.
    fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
            "messages": [
                {
                    "role": "user",
                    "content": prompt,
                }
            ],
        })
    }

    /// Extract the first choice's message content from a parsed response.
    ///
    /// An empty or contentless `choices` array degrades to the fixed
    /// [`GENERATION_FAILED`] reply rather than an error.
    fn parse_response(&self, response: OpenRouterResponse) -> CompletionReply {
        let reply = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|msg| msg.content)
            .filter(|content| !content.trim().is_empty())
            .unwrap_or_else(|| {
                tracing::warn!("provider returned no usable choice, substituting fallback reply");
                GENERATION_FAILED.to_string()
            });

        CompletionReply {
            reply,
            model: response.model,
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenRouterProvider {
    fn name(&self) -> &'static str {
        "openrouter"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn complete(&self, prompt: &str) -> CompletionResult<CompletionReply> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| missing_api_key_error("openrouter"))?;

        let body = self.build_request_body(prompt);

        let mut request = self
            .client
            .post(self.base_url())
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json");

        if let Some(referer) = &self.config.referer {
            request = request.header("HTTP-Referer", referer);
        }
        if let Some(title) = &self.config.title {
            request = request.header("X-Title", title);
        }

        let response = request
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body_text = response
            .text()
            .await
            .map_err(|e| CompletionError::NetworkError {
                message: e.to_string(),
            })?;

        if !(200..300).contains(&status) {
            let err = parse_http_error(status, &body_text, "openrouter");
            tracing::error!(status, error = %err, "openrouter request failed");
            return Err(err);
        }

        let parsed: OpenRouterResponse =
            serde_json::from_str(&body_text).map_err(|e| CompletionError::ParseError {
                message: format!("Failed to parse response: {}", e),
            })?;

        Ok(self.parse_response(parsed))
    }

    async fn health_check(&self) -> CompletionResult<()> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| missing_api_key_error("openrouter"))?;

        // List models to verify the API key
        let response = self
            .client
            .get(OPENROUTER_MODELS_URL)
            .header("Authorization", format!("Bearer {}", api_key))
            .send()
            .await
            .map_err(|e| CompletionError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        if status == 200 {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(parse_http_error(status, &body, "openrouter"))
        }
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

/// OpenRouter API response format. Fields are lenient so a 2xx body with an
/// unexpected shape parses into the placeholder path instead of erroring.
#[derive(Debug, Deserialize)]
struct OpenRouterResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}
