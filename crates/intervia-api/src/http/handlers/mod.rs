//! HTTP request handlers, grouped by resource.

pub mod catalog;
pub mod chat;
pub mod interview;
