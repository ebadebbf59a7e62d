//! Chat Service
//!
//! Drives the five-question interview against the completion gateway and
//! maintains the conversation transcript.

pub mod session;

pub use session::ChatSession;
