//! Infrastructure layer for Postbox.
//!
//! Contains the SQLite implementation of the repository trait defined in
//! `postbox-core`, plus server configuration loading.

pub mod config;
pub mod sqlite;
