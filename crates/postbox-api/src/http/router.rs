//! Axum router configuration with middleware.
//!
//! Middleware: CORS, request tracing, panic capture (a panicking handler
//! still answers 500 instead of dropping the connection).

use axum::Router;
use axum::routing::{delete, get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/",
            get(liveness).post(handlers::message::create_message),
        )
        .route("/message/{id}", get(handlers::message::get_message))
        .route("/message/{id}", delete(handlers::message::delete_message))
        .route("/messages", get(handlers::message::list_messages))
        .route("/health", get(health_check))
        .layer(CatchPanicLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / - Plain-text liveness response.
async fn liveness() -> &'static str {
    "Chat App Backend Running"
}

/// GET /health - Machine-readable health check.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
