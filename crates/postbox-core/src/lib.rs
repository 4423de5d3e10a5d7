//! Business logic and repository trait definitions for Postbox.
//!
//! This crate defines the "port" (the `MessageRepository` trait) that the
//! infrastructure layer implements, plus the validator, the pagination
//! engine, and the service orchestrating them. It depends only on
//! `postbox-types` -- never on `postbox-infra` or any database/IO crate.

pub mod pagination;
pub mod repository;
pub mod service;
pub mod validate;
