//! Completion Gateway Types
//!
//! Core types for talking to a hosted chat-completion provider.

use pitch_writer_core::ProxyConfig;
use serde::{Deserialize, Serialize};

/// Configuration for a completion provider.
///
/// The API key is supplied by the process environment at startup and is never
/// serialized back to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key for the provider
    #[serde(skip_serializing, default)]
    pub api_key: Option<String>,
    /// Base URL override (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Model identifier to request
    pub model: String,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Temperature (0.0 - 1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// `HTTP-Referer` attribution header some deployments require
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referer: Option<String>,
    /// `X-Title` attribution header some deployments require
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Bound on the whole request, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Optional outbound proxy
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub proxy: Option<ProxyConfig>,
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: "openai/gpt-3.5-turbo".to_string(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            referer: Some("http://localhost:3000".to_string()),
            title: Some("Pitch Writer".to_string()),
            timeout_secs: default_timeout_secs(),
            proxy: None,
        }
    }
}

/// A successful completion, normalized across providers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionReply {
    /// The extracted reply text
    pub reply: String,
    /// Model the provider reports having used, when present
    pub model: Option<String>,
}

/// Errors that can occur when calling a completion provider.
///
/// The `message` fields carry the provider's raw error payload for operator
/// logs; [`CompletionError::user_message`] is the string safe to show end
/// users.
#[derive(Debug, Clone)]
pub enum CompletionError {
    /// Authentication failed (missing or invalid API key)
    AuthenticationFailed { message: String },
    /// Rate limit exceeded
    RateLimited {
        message: String,
        retry_after: Option<u32>,
    },
    /// Invalid request (bad parameters)
    InvalidRequest { message: String },
    /// Server error from the provider
    ServerError {
        message: String,
        status: Option<u16>,
    },
    /// Network/connection error
    NetworkError { message: String },
    /// Response parsing error
    ParseError { message: String },
    /// Other error
    Other { message: String },
}

impl CompletionError {
    /// Generic message safe to surface to end users. Never contains the
    /// credential or the provider's raw payload.
    pub fn user_message(&self) -> &'static str {
        match self {
            CompletionError::AuthenticationFailed { .. } => {
                "The AI service is not configured correctly."
            }
            CompletionError::RateLimited { .. } => {
                "The AI service is busy right now. Please try again shortly."
            }
            CompletionError::InvalidRequest { .. }
            | CompletionError::ServerError { .. }
            | CompletionError::ParseError { .. }
            | CompletionError::Other { .. } => "AI request failed",
            CompletionError::NetworkError { .. } => "Could not reach the AI service.",
        }
    }
}

impl std::fmt::Display for CompletionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompletionError::AuthenticationFailed { message } => {
                write!(f, "Authentication failed: {}", message)
            }
            CompletionError::RateLimited { message, .. } => {
                write!(f, "Rate limited: {}", message)
            }
            CompletionError::InvalidRequest { message } => {
                write!(f, "Invalid request: {}", message)
            }
            CompletionError::ServerError { message, status } => {
                if let Some(s) = status {
                    write!(f, "Server error ({}): {}", s, message)
                } else {
                    write!(f, "Server error: {}", message)
                }
            }
            CompletionError::NetworkError { message } => {
                write!(f, "Network error: {}", message)
            }
            CompletionError::ParseError { message } => {
                write!(f, "Parse error: {}", message)
            }
            CompletionError::Other { message } => {
                write!(f, "Error: {}", message)
            }
        }
    }
}

impl std::error::Error for CompletionError {}

/// Result type alias for gateway operations
pub type CompletionResult<T> = Result<T, CompletionError>;
