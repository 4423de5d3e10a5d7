//! Repository trait definitions (ports implemented by postbox-infra).

pub mod message;

pub use message::MessageRepository;
