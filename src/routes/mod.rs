//! HTTP Routes
//!
//! The axum router: the chat proxy route and the health route.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use crate::models::response::{ChatReply, ChatRequest, HealthResponse};
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(post_chat))
        .route("/api/health", get(get_health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// `POST /api/chat` - forward a prompt to the completion provider
async fn post_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> AppResult<Json<ChatReply>> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(AppError::validation("message must not be empty"));
    }

    tracing::debug!(chars = message.len(), "forwarding chat request");
    let completion = state.provider().complete(message).await?;

    Ok(Json(ChatReply {
        reply: completion.reply,
        model: completion.model,
    }))
}

/// `GET /api/health` - liveness plus the configured provider identity
async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    let provider = state.provider();
    Json(HealthResponse {
        provider: provider.name().to_string(),
        model: provider.model().to_string(),
        ..Default::default()
    })
}
