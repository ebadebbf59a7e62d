//! Completion Provider Trait
//!
//! Defines the common interface for completion gateways. The trait is the
//! seam where tests substitute stub providers, so no concrete HTTP machinery
//! leaks through it.

use async_trait::async_trait;

use super::types::{CompletionError, CompletionReply, CompletionResult, ProviderConfig};

/// Trait that all completion providers must implement.
///
/// One `complete` call maps to exactly one outbound request: providers do not
/// retry, and a failed call surfaces immediately as an error result.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Returns the provider name for identification.
    fn name(&self) -> &'static str;

    /// Returns the model being requested.
    fn model(&self) -> &str;

    /// Forward one assembled prompt and normalize the outcome.
    ///
    /// The prompt is sent as a single-message conversation with
    /// `role = user`. Implementations must fail fast on a missing credential
    /// before any network I/O is attempted.
    async fn complete(&self, prompt: &str) -> CompletionResult<CompletionReply>;

    /// Check if the provider is reachable and the credential is valid.
    async fn health_check(&self) -> CompletionResult<()>;

    /// Get the configuration for this provider.
    fn config(&self) -> &ProviderConfig;
}

/// Helper function to create an error for a missing API key
pub fn missing_api_key_error(provider: &str) -> CompletionError {
    CompletionError::AuthenticationFailed {
        message: format!("API key not configured for {}", provider),
    }
}

/// Helper function to map HTTP error status codes to normalized errors
pub fn parse_http_error(status: u16, body: &str, provider: &str) -> CompletionError {
    match status {
        401 => CompletionError::AuthenticationFailed {
            message: format!("{}: Invalid API key", provider),
        },
        403 => CompletionError::AuthenticationFailed {
            message: format!("{}: Access denied", provider),
        },
        429 => CompletionError::RateLimited {
            message: body.to_string(),
            retry_after: None,
        },
        400 => CompletionError::InvalidRequest {
            message: body.to_string(),
        },
        500..=599 => CompletionError::ServerError {
            message: body.to_string(),
            status: Some(status),
        },
        _ => CompletionError::Other {
            message: format!("HTTP {}: {}", status, body),
        },
    }
}
