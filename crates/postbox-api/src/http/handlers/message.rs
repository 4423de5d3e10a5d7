//! Message CRUD HTTP handlers.
//!
//! Endpoints:
//! - POST   /              - Create a message
//! - GET    /message/{id}  - Fetch one message
//! - GET    /messages      - Paginated list, newest first
//! - DELETE /message/{id}  - Delete a message

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Deserializer, Serialize};

use postbox_core::pagination::PageRequest;
use postbox_types::message::{Message, NewMessage};
use postbox_types::page::MessagePage;

use crate::http::error::AppError;
use crate::state::AppState;

/// Query parameters for the paginated list.
///
/// Values that fail to parse as integers degrade to the service defaults
/// rather than failing extraction; explicitly out-of-range values are
/// rejected by the pagination engine.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub limit: Option<i64>,
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

/// Response body for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
    pub deleted: Message,
}

/// POST / - Create a message.
pub async fn create_message(
    State(state): State<AppState>,
    Json(candidate): Json<NewMessage>,
) -> Result<Json<Message>, AppError> {
    let stored = state.message_service.create(candidate).await?;
    Ok(Json(stored))
}

/// GET /message/{id} - Fetch one message by id.
pub async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, AppError> {
    let msg = state.message_service.get(&id).await?;
    Ok(Json(msg))
}

/// GET /messages?page&limit - Paginated list of messages, newest first.
pub async fn list_messages(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<MessagePage>, AppError> {
    let page = state
        .message_service
        .list(PageRequest {
            page: query.page,
            limit: query.limit,
        })
        .await?;
    Ok(Json(page))
}

/// DELETE /message/{id} - Delete a message by id.
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state.message_service.delete(&id).await?;
    Ok(Json(DeleteResponse {
        message: "Message deleted",
        deleted,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_lenient_parse() {
        let query: ListQuery = serde_json::from_value(serde_json::json!({
            "page": "2",
            "limit": "abc"
        }))
        .unwrap();
        assert_eq!(query.page, Some(2));
        assert_eq!(query.limit, None);
    }

    #[test]
    fn test_delete_response_shape() {
        let body = DeleteResponse {
            message: "Message deleted",
            deleted: Message {
                id: "m1".to_string(),
                content: "hi".to_string(),
                sender: "alice".to_string(),
                timestamp: 1000,
            },
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["message"], "Message deleted");
        assert_eq!(value["deleted"]["id"], "m1");
    }
}
