//! HTTP request handlers.

pub mod message;
