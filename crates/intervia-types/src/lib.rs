//! Shared domain types for Intervia.
//!
//! This crate contains the core domain types used across the Intervia
//! platform: interview sessions, evaluation and summary records, chat
//! sessions, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod error;
pub mod interview;
pub mod llm;
