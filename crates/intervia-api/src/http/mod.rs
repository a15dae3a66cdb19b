//! REST API layer: error mapping, handlers, and router assembly.

pub mod error;
pub mod handlers;
pub mod router;
