//! HTTP layer: error translation, handlers, and router.

pub mod error;
pub mod handlers;
pub mod router;
