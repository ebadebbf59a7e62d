//! Business Logic Services

pub mod chat;
