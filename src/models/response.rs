//! Response Types
//!
//! Request and response shapes for the HTTP routes.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`.
///
/// The field is accepted as either `message` or `prompt`; both shapes are in
/// active use by clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(alias = "prompt")]
    pub message: String,
}

/// Successful `POST /api/chat` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub service: String,
    pub provider: String,
    pub model: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            service: "pitch-writer".to_string(),
            provider: String::new(),
            model: String::new(),
        }
    }
}
