//! SQLite persistence: connection pool and repository implementation.

pub mod message;
pub mod pool;
