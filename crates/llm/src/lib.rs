//! Pitch Writer LLM
//!
//! Provides the completion gateway for Pitch Writer: a provider trait, the
//! OpenRouter chat-completions implementation, normalized error types, and
//! the HTTP client factory.

pub mod http_client;
pub mod openrouter;
pub mod provider;
pub mod types;

// Re-export main types
pub use http_client::build_http_client;
pub use openrouter::OpenRouterProvider;
pub use provider::{missing_api_key_error, parse_http_error, CompletionProvider};
pub use types::*;
