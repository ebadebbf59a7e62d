//! Storage Layer
//!
//! JSON configuration persistence. The API credential is deliberately not
//! stored here; it is read from the environment.

pub mod config;

pub use config::ConfigService;
