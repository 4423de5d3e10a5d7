//! Service layer orchestrating validation, pagination, and storage.

pub mod message;

pub use message::MessageService;
