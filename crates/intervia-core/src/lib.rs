//! Interview state machine and resilient generation pipeline for Intervia.
//!
//! This crate defines the "ports" (the [`llm::provider::TextGenerator`] and
//! [`store::SessionStore`] traits) that the infrastructure layer implements.
//! It depends only on `intervia-types` -- never on `intervia-infra` or any
//! HTTP/IO crate.

pub mod engine;
pub mod fallback;
pub mod generator;
pub mod llm;
pub mod parser;
pub mod prompt;
pub mod store;
