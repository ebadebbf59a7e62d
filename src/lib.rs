//! Pitch Writer - Application Library
//!
//! Binds the workspace together: the axum HTTP server exposing the chat
//! proxy route, the JSON configuration layer, the interview session service,
//! and the terminal wizard. Domain types live in `pitch-writer-core`; the
//! OpenRouter gateway lives in `pitch-writer-llm`.

pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;
pub mod wizard;

// Re-export commonly used items
pub use models::response::{ChatReply, ChatRequest, HealthResponse};
pub use models::settings::AppConfig;
pub use routes::build_router;
pub use services::chat::ChatSession;
pub use state::AppState;
pub use storage::ConfigService;
pub use utils::error::{AppError, AppResult};
