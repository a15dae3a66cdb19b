//! Infrastructure implementations for Intervia.
//!
//! Concrete implementations of the intervia-core ports: the Gemini model
//! provider, the in-memory session store, environment configuration, and
//! the PDF report renderer.

pub mod config;
pub mod llm;
pub mod report;
pub mod store;
