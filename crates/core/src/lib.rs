//! Pitch Writer Core
//!
//! Foundational conversation types for the Pitch Writer workspace. This crate
//! has zero dependencies on application-level code (HTTP server, LLM
//! providers, etc.).
//!
//! ## Module Organization
//!
//! - `message` - Conversation transcript types (`Message`, `MessageRole`)
//! - `questionnaire` - The linear five-question interview state machine
//! - `prompt` - Compound prompt assembly and the reply-splitting contract
//! - `proxy` - Proxy configuration data types shared across workspace crates
//!
//! ## Design Principles
//!
//! 1. **Zero external dependencies beyond serde/uuid/chrono** - keeps build times minimal
//! 2. **Explicit state transitions** - question emission happens on `submit`,
//!    never as an implicit side effect, so re-entrant callers cannot duplicate prompts
//! 3. **Unidirectional dependency** - this crate depends on nothing else in the workspace

pub mod message;
pub mod prompt;
pub mod proxy;
pub mod questionnaire;

// ── Transcript Types ───────────────────────────────────────────────────
pub use message::{Message, MessageRole};

// ── Questionnaire State Machine ────────────────────────────────────────
pub use questionnaire::{Questionnaire, SubmitOutcome, GREETING, QUESTIONS};

// ── Prompt Assembly ────────────────────────────────────────────────────
pub use prompt::{
    assemble_pitch_prompt, assemble_revision_prompt, split_reply_into_pitch_and_followup,
    DEFAULT_FOLLOWUP, GENERATION_FAILED,
};

// ── Proxy Types ────────────────────────────────────────────────────────
pub use proxy::{ProxyConfig, ProxyProtocol};
