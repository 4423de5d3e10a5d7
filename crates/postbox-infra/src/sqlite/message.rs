//! SQLite message repository implementation.
//!
//! Implements `MessageRepository` from `postbox-core` using sqlx with split
//! read/write pools. The `id` column carries a UNIQUE constraint, so the
//! uniqueness invariant holds even when two creates race past the service
//! layer's pre-check; listing orders by `timestamp DESC, seq ASC` where
//! `seq` is the insertion-order rowid alias.

use postbox_core::repository::MessageRepository;
use postbox_types::error::StoreError;
use postbox_types::message::Message;
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `MessageRepository`.
pub struct SqliteMessageRepository {
    pool: DatabasePool,
}

impl SqliteMessageRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn message_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Message, StoreError> {
    let read = |e: sqlx::Error| StoreError::Query(e.to_string());
    Ok(Message {
        id: row.try_get("id").map_err(read)?,
        content: row.try_get("content").map_err(read)?,
        sender: row.try_get("sender").map_err(read)?,
        timestamp: row.try_get("timestamp").map_err(read)?,
    })
}

impl MessageRepository for SqliteMessageRepository {
    async fn insert(&self, msg: &Message) -> Result<(), StoreError> {
        let result = sqlx::query(
            "INSERT INTO messages (id, content, sender, timestamp) VALUES (?, ?, ?, ?)",
        )
        .bind(&msg.id)
        .bind(&msg.content)
        .bind(&msg.sender)
        .bind(msg.timestamp)
        .execute(&self.pool.writer)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.message().contains("UNIQUE") => Err(
                StoreError::Conflict(format!("message '{}' already exists", msg.id)),
            ),
            Err(sqlx::Error::PoolTimedOut) => Err(StoreError::Connection),
            Err(e) => Err(StoreError::Query(e.to_string())),
        }
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Message>, StoreError> {
        let row = sqlx::query("SELECT id, content, sender, timestamp FROM messages WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        row.as_ref().map(message_from_row).transpose()
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Message>, StoreError> {
        let row = sqlx::query(
            "DELETE FROM messages WHERE id = ? RETURNING id, content, sender, timestamp",
        )
        .bind(id)
        .fetch_optional(&self.pool.writer)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        row.as_ref().map(message_from_row).transpose()
    }

    async fn list_page(&self, skip: u64, limit: u64) -> Result<(Vec<Message>, u64), StoreError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM messages")
            .fetch_one(&self.pool.reader)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let rows = sqlx::query(
            r#"SELECT id, content, sender, timestamp FROM messages
               ORDER BY timestamp DESC, seq ASC
               LIMIT ? OFFSET ?"#,
        )
        .bind(limit as i64)
        .bind(skip as i64)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        let mut messages = Vec::with_capacity(rows.len());
        for row in &rows {
            messages.push(message_from_row(row)?);
        }
        Ok((messages, total as u64))
    }
}
