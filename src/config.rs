// src/config.rs
use std::net::SocketAddr;

use crate::error::ConfigError;

const DEFAULT_UPSTREAM_BASE: &str = "http://api:8000";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Process-wide settings, built once at startup and handed to the relay.
/// Nothing reads the environment after this is constructed.
#[derive(Clone, Debug)]
pub struct BridgeConfig {
    /// Base address for generic and health forwarding.
    pub upstream_base: String,
    /// Full URL for chat forwarding (`API_URL` overrides it).
    pub chat_url: String,
    /// Forwarded as `x-api-key` on chat requests when set.
    pub api_key: Option<String>,
    pub bind_addr: SocketAddr,
}

impl BridgeConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let upstream_base = var("UPSTREAM_BASE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_UPSTREAM_BASE.to_string());
        let upstream_base = upstream_base.trim_end_matches('/').to_string();

        let chat_url = var("API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| format!("{upstream_base}/chat"));

        // An empty API_KEY means "no key", matching the deployment convention.
        let api_key = var("API_KEY")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let addr = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = addr.parse().map_err(|source| ConfigError::BindAddr {
            addr: addr.clone(),
            source,
        })?;

        Ok(Self {
            upstream_base,
            chat_url,
            api_key,
            bind_addr,
        })
    }
}
