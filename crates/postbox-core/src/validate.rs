//! Field validation for candidate messages.
//!
//! Rules apply in order and the first failure wins, so a request missing
//! both `id` and `content` reports the id. All three fields are required
//! with no silent defaults. Uniqueness (the fourth create-time rule) needs
//! a store read and lives in the service layer.

use postbox_types::error::MessageError;
use postbox_types::message::NewMessage;

/// A candidate that passed field validation.
///
/// Owns the field values so callers never re-unwrap options after the
/// checks have run.
#[derive(Debug, Clone)]
pub struct ValidMessage {
    pub id: String,
    pub content: String,
    pub sender: String,
    pub timestamp: Option<i64>,
}

/// Validate a candidate message: `id`, `content`, `sender` must each be
/// present (as strings) and non-empty. No side effects.
pub fn validate_new_message(candidate: NewMessage) -> Result<ValidMessage, MessageError> {
    let id = required(candidate.id)
        .ok_or_else(|| MessageError::InvalidId("id must be a non-empty string".to_string()))?;
    let content = required(candidate.content).ok_or_else(|| {
        MessageError::InvalidContent("content must be a non-empty string".to_string())
    })?;
    let sender = required(candidate.sender).ok_or_else(|| {
        MessageError::InvalidSender("sender must be a non-empty string".to_string())
    })?;

    Ok(ValidMessage {
        id,
        content,
        sender,
        timestamp: candidate.timestamp,
    })
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
