use thiserror::Error;

/// Errors surfaced by message operations.
///
/// The HTTP layer is the only place these become status codes:
/// `InvalidId | InvalidContent | InvalidSender | InvalidPagination` map to
/// 400, `DuplicateId` to 409, `NotFound` to 404, `Storage` to 500.
#[derive(Debug, Error)]
pub enum MessageError {
    #[error("invalid id: {0}")]
    InvalidId(String),

    #[error("invalid content: {0}")]
    InvalidContent(String),

    #[error("invalid sender: {0}")]
    InvalidSender(String),

    #[error("invalid pagination: {0}")]
    InvalidPagination(String),

    #[error("message with id '{0}' already exists")]
    DuplicateId(String),

    #[error("message not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors from store operations (used by the repository trait in postbox-core).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("storage operation timed out")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_error_display() {
        let err = MessageError::DuplicateId("m1".to_string());
        assert_eq!(err.to_string(), "message with id 'm1' already exists");

        let err = MessageError::InvalidContent("content must be a non-empty string".to_string());
        assert!(err.to_string().contains("content"));
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");

        let err = StoreError::Timeout;
        assert_eq!(err.to_string(), "storage operation timed out");
    }
}
