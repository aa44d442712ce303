// src/routes/mod.rs
pub mod bridge;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::SharedState;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/bridge/chat", post(bridge::chat_handler))
        .route("/bridge/health", get(bridge::health_handler))
        .route("/bridge/{*path}", get(bridge::forward_handler))
        // The chat page and its assets.
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
}
