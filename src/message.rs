// src/message.rs
use serde::{Deserialize, Serialize};

/// Wire shape the chat page posts to `/bridge/chat`. The bridge itself
/// forwards the raw body without parsing it; this type documents the
/// contract and backs the tests.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Wire shape the upstream answers with (and the bridge's chat fallback).
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}
