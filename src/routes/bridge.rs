// src/routes/bridge.rs
use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};

use crate::services::relay::RelayResult;
use crate::state::SharedState;

/// GET /bridge/{*path} — generic pass-through to the upstream.
pub async fn forward_handler(
    State(state): State<SharedState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
) -> RelayResult {
    state.relay.forward(&path, query.as_deref()).await
}

/// POST /bridge/chat — raw body forwarded to the chat endpoint. The body
/// is not parsed or validated here; the upstream owns its contract.
pub async fn chat_handler(State(state): State<SharedState>, body: Bytes) -> RelayResult {
    state.relay.forward_chat(body).await
}

/// GET /bridge/health — fixed pass-through to the upstream's /health.
pub async fn health_handler(State(state): State<SharedState>) -> RelayResult {
    state.relay.forward_health().await
}
