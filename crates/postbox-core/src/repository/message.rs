//! Message repository trait definition.
//!
//! Defines the storage interface for the message collection. The
//! infrastructure layer (postbox-infra) implements this trait with SQLite
//! persistence.

use postbox_types::error::StoreError;
use postbox_types::message::Message;

/// Repository trait for message persistence.
///
/// The store owns two invariants the service layer relies on:
/// - **Uniqueness:** `insert` fails with `StoreError::Conflict` when the id
///   already exists. This is a stored constraint, not a pre-check, so a
///   racing duplicate create still loses cleanly.
/// - **Ordering:** `list_page` returns messages by timestamp descending,
///   with ties broken by insertion order (stable).
///
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait MessageRepository: Send + Sync {
    /// Persist a message. Fails with `Conflict` if the id already exists.
    fn insert(
        &self,
        msg: &Message,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Fetch a message by id; `None` when absent.
    fn get_by_id(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<Message>, StoreError>> + Send;

    /// Delete a message by id, returning the deleted message.
    ///
    /// Idempotent: deleting an absent id returns `None`, not an error.
    fn delete_by_id(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<Message>, StoreError>> + Send;

    /// One window of the ordered collection plus the total message count.
    fn list_page(
        &self,
        skip: u64,
        limit: u64,
    ) -> impl std::future::Future<Output = Result<(Vec<Message>, u64), StoreError>> + Send;
}
