//! Message domain types for Postbox.
//!
//! `Message` is the persisted entity; `NewMessage` is the raw client
//! submission before validation. `NewMessage` deserializes leniently: a
//! missing field and a field of the wrong JSON type both land as `None`,
//! so the validator reports them identically ("id must be a non-empty
//! string") instead of the request dying inside body extraction.

use serde::{Deserialize, Deserializer, Serialize};

/// A stored chat message.
///
/// Immutable once created; the only mutation in the system is
/// delete-by-id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Caller-supplied identifier, unique across the collection.
    pub id: String,
    /// Message body, non-empty.
    pub content: String,
    /// Sender handle, non-empty.
    pub sender: String,
    /// Creation time in epoch milliseconds.
    pub timestamp: i64,
}

/// Candidate message as submitted by a client, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewMessage {
    #[serde(default, deserialize_with = "string_or_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub sender: Option<String>,
    /// Optional client-supplied timestamp (epoch milliseconds). Assigned
    /// from the wall clock at create time when absent.
    #[serde(default, deserialize_with = "millis_or_none")]
    pub timestamp: Option<i64>,
}

/// Accept any JSON value but keep only strings; everything else becomes
/// `None` and fails validation with the field's own error kind.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn millis_or_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => Ok(n.as_i64()),
        _ => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
