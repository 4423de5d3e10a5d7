//! Message service: the single entry point for create, get, list, delete.
//!
//! Generic over `MessageRepository` to keep clean layering -- postbox-core
//! never depends on postbox-infra. Every store call runs under a bounded
//! wait so a wedged backend surfaces as a storage error instead of hanging
//! the request.

use std::future::Future;
use std::time::Duration;

use postbox_types::error::{MessageError, StoreError};
use postbox_types::message::{Message, NewMessage};
use postbox_types::page::MessagePage;

use crate::pagination::{self, PageRequest};
use crate::repository::MessageRepository;
use crate::validate;

/// Upper bound on any single store operation.
const STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Service orchestrating the message lifecycle.
pub struct MessageService<R: MessageRepository> {
    repo: R,
}

impl<R: MessageRepository> MessageService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a message: validate fields, reject duplicate ids, stamp the
    /// timestamp when the client omitted one.
    ///
    /// Either the message is fully stored or nothing is written. The
    /// duplicate pre-check keeps the common case cheap; a concurrent
    /// duplicate that slips past it is still caught by the store's
    /// uniqueness constraint on insert.
    pub async fn create(&self, candidate: NewMessage) -> Result<Message, MessageError> {
        let valid = validate::validate_new_message(candidate)?;

        match self.bounded(self.repo.get_by_id(&valid.id)).await {
            Ok(Some(_)) => return Err(MessageError::DuplicateId(valid.id)),
            Ok(None) => {}
            Err(e) => return Err(storage(e)),
        }

        let msg = Message {
            timestamp: valid
                .timestamp
                .unwrap_or_else(|| chrono::Utc::now().timestamp_millis()),
            id: valid.id,
            content: valid.content,
            sender: valid.sender,
        };

        match self.bounded(self.repo.insert(&msg)).await {
            Ok(()) => {
                tracing::debug!(id = %msg.id, "message stored");
                Ok(msg)
            }
            // Lost the race against a concurrent create with the same id.
            Err(StoreError::Conflict(_)) => Err(MessageError::DuplicateId(msg.id)),
            Err(e) => Err(storage(e)),
        }
    }

    /// Fetch a message by id.
    pub async fn get(&self, id: &str) -> Result<Message, MessageError> {
        check_id(id)?;
        self.bounded(self.repo.get_by_id(id))
            .await
            .map_err(storage)?
            .ok_or(MessageError::NotFound)
    }

    /// Delete a message by id, returning the deleted message.
    pub async fn delete(&self, id: &str) -> Result<Message, MessageError> {
        check_id(id)?;
        let deleted = self
            .bounded(self.repo.delete_by_id(id))
            .await
            .map_err(storage)?
            .ok_or(MessageError::NotFound)?;
        tracing::debug!(id = %deleted.id, "message deleted");
        Ok(deleted)
    }

    /// One page of the collection, newest first.
    pub async fn list(&self, request: PageRequest) -> Result<MessagePage, MessageError> {
        let window = request.window()?;
        let (messages, total) = self
            .bounded(self.repo.list_page(window.skip, window.limit))
            .await
            .map_err(storage)?;

        Ok(MessagePage {
            page: window.page,
            limit: window.limit,
            total,
            total_pages: pagination::total_pages(total, window.limit),
            messages,
        })
    }

    async fn bounded<T>(
        &self,
        op: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        match tokio::time::timeout(STORE_TIMEOUT, op).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Timeout),
        }
    }
}

fn check_id(id: &str) -> Result<(), MessageError> {
    if id.is_empty() {
        return Err(MessageError::InvalidId(
            "id must be a non-empty string".to_string(),
        ));
    }
    Ok(())
}

fn storage(e: StoreError) -> MessageError {
    MessageError::Storage(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Reverse;
    use std::sync::Mutex;

    /// In-memory repository double preserving insertion order, mirroring
    /// the SQLite implementation's ordering contract.
    #[derive(Default)]
    struct InMemoryRepository {
        messages: Mutex<Vec<Message>>,
    }

    impl MessageRepository for InMemoryRepository {
        async fn insert(&self, msg: &Message) -> Result<(), StoreError> {
            let mut messages = self.messages.lock().unwrap();
            if messages.iter().any(|m| m.id == msg.id) {
                return Err(StoreError::Conflict(format!(
                    "message '{}' already exists",
                    msg.id
                )));
            }
            messages.push(msg.clone());
            Ok(())
        }

        async fn get_by_id(&self, id: &str) -> Result<Option<Message>, StoreError> {
            let messages = self.messages.lock().unwrap();
            Ok(messages.iter().find(|m| m.id == id).cloned())
        }

        async fn delete_by_id(&self, id: &str) -> Result<Option<Message>, StoreError> {
            let mut messages = self.messages.lock().unwrap();
            match messages.iter().position(|m| m.id == id) {
                Some(pos) => Ok(Some(messages.remove(pos))),
                None => Ok(None),
            }
        }

        async fn list_page(&self, skip: u64, limit: u64) -> Result<(Vec<Message>, u64), StoreError> {
            let messages = self.messages.lock().unwrap();
            let total = messages.len() as u64;
            // Stable sort keeps insertion order for equal timestamps.
            let mut ordered = messages.clone();
            ordered.sort_by_key(|m| Reverse(m.timestamp));
            let page = ordered
                .into_iter()
                .skip(skip as usize)
                .take(limit as usize)
                .collect();
            Ok((page, total))
        }
    }

    fn service() -> MessageService<InMemoryRepository> {
        MessageService::new(InMemoryRepository::default())
    }

    fn candidate(id: &str, content: &str, sender: &str) -> NewMessage {
        NewMessage {
            id: Some(id.to_string()),
            content: Some(content.to_string()),
            sender: Some(sender.to_string()),
            timestamp: None,
        }
    }

    fn candidate_at(id: &str, timestamp: i64) -> NewMessage {
        NewMessage {
            timestamp: Some(timestamp),
            ..candidate(id, "hi", "alice")
        }
    }

    #[tokio::test]
    async fn test_create_then_get_roundtrip() {
        let svc = service();

        let stored = svc.create(candidate("m1", "hi", "alice")).await.unwrap();
        assert!(stored.timestamp > 0, "timestamp should be stamped");

        let fetched = svc.get("m1").await.unwrap();
        assert_eq!(fetched.id, "m1");
        assert_eq!(fetched.content, "hi");
        assert_eq!(fetched.sender, "alice");
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected_without_overwrite() {
        let svc = service();

        svc.create(candidate("m1", "first", "alice")).await.unwrap();
        let err = svc
            .create(candidate("m1", "second", "bob"))
            .await
            .unwrap_err();
        assert!(matches!(err, MessageError::DuplicateId(ref id) if id == "m1"));

        // First message untouched.
        let fetched = svc.get("m1").await.unwrap();
        assert_eq!(fetched.content, "first");
        assert_eq!(fetched.sender, "alice");
    }

    #[tokio::test]
    async fn test_validation_errors_map_to_field() {
        let svc = service();

        let err = svc.create(candidate("", "hi", "alice")).await.unwrap_err();
        assert!(matches!(err, MessageError::InvalidId(_)));

        let err = svc.create(candidate("m1", "", "alice")).await.unwrap_err();
        assert!(matches!(err, MessageError::InvalidContent(_)));

        let err = svc.create(candidate("m1", "hi", "")).await.unwrap_err();
        assert!(matches!(err, MessageError::InvalidSender(_)));
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let svc = service();
        let err = svc.get("nope").await.unwrap_err();
        assert!(matches!(err, MessageError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_is_permanent_and_missing_is_not_found() {
        let svc = service();
        svc.create(candidate("m1", "hi", "alice")).await.unwrap();

        let deleted = svc.delete("m1").await.unwrap();
        assert_eq!(deleted.id, "m1");

        let err = svc.get("m1").await.unwrap_err();
        assert!(matches!(err, MessageError::NotFound));

        let err = svc.delete("m1").await.unwrap_err();
        assert!(matches!(err, MessageError::NotFound));
    }

    #[tokio::test]
    async fn test_list_pagination_metadata() {
        let svc = service();
        for i in 0..15 {
            svc.create(candidate_at(&format!("m{i}"), i)).await.unwrap();
        }

        let page1 = svc.list(PageRequest::default()).await.unwrap();
        assert_eq!(page1.messages.len(), 10);
        assert_eq!(page1.total, 15);
        assert_eq!(page1.total_pages, 2);
        assert_eq!(page1.page, 1);
        assert_eq!(page1.limit, 10);

        let page2 = svc
            .list(PageRequest {
                page: Some(2),
                limit: None,
            })
            .await
            .unwrap();
        assert_eq!(page2.messages.len(), 5);
        assert_eq!(page2.total_pages, 2);
    }

    #[tokio::test]
    async fn test_list_ordered_newest_first_with_stable_ties() {
        let svc = service();
        svc.create(candidate_at("old", 100)).await.unwrap();
        svc.create(candidate_at("tie-a", 200)).await.unwrap();
        svc.create(candidate_at("tie-b", 200)).await.unwrap();
        svc.create(candidate_at("new", 300)).await.unwrap();

        let page = svc.list(PageRequest::default()).await.unwrap();
        let ids: Vec<&str> = page.messages.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "tie-a", "tie-b", "old"]);
    }

    #[tokio::test]
    async fn test_list_empty_collection() {
        let svc = service();
        let page = svc.list(PageRequest::default()).await.unwrap();
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.messages.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_pagination_rejected() {
        let svc = service();
        let err = svc
            .list(PageRequest {
                page: Some(0),
                limit: Some(10),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, MessageError::InvalidPagination(_)));
    }
}
