//! Model gateway abstraction for Intervia.
//!
//! - `TextGenerator`: RPITIT trait for concrete provider implementations

pub mod provider;
