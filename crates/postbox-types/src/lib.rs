//! Shared domain types for Postbox.
//!
//! This crate contains the message entity, the pre-validation candidate
//! shape, page types, server configuration, and the error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod config;
pub mod error;
pub mod message;
pub mod page;
