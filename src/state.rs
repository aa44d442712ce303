// src/state.rs
use std::sync::Arc;

use crate::config::BridgeConfig;
use crate::services::relay::Relay;

pub type SharedState = Arc<AppState>;

/// Shared across requests but immutable: the relay holds only the config
/// and a cloneable HTTP client, so no locking is needed.
pub struct AppState {
    pub relay: Relay,
}

impl AppState {
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            relay: Relay::new(config),
        }
    }
}
