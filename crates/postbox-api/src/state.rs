//! Application state wiring the message service to its SQLite store.
//!
//! The database pool is an explicit handle: constructed once at startup,
//! injected here, and closed by [`AppState::close`] at shutdown. No
//! module-level singletons.

use std::sync::Arc;

use postbox_core::service::MessageService;
use postbox_infra::sqlite::message::SqliteMessageRepository;
use postbox_infra::sqlite::pool::DatabasePool;

/// The service generic pinned to the SQLite repository.
pub type ConcreteMessageService = MessageService<SqliteMessageRepository>;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub message_service: Arc<ConcreteMessageService>,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Connect to the database, run migrations, and wire the service.
    pub async fn init(database_url: &str) -> anyhow::Result<Self> {
        let db_pool = DatabasePool::new(database_url).await?;
        let repo = SqliteMessageRepository::new(db_pool.clone());

        Ok(Self {
            message_service: Arc::new(MessageService::new(repo)),
            db_pool,
        })
    }

    /// Close the database pools. Called once after the server drains.
    pub async fn close(&self) {
        self.db_pool.close().await;
    }
}
