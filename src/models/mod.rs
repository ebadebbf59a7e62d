//! Data Models
//!
//! Request/response shapes for the HTTP boundary and the persisted
//! application settings.

pub mod response;
pub mod settings;
