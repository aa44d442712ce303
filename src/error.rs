// src/error.rs
use thiserror::Error;

/// Failure to reach the upstream before a response was obtained. Upstream
/// error statuses are not errors at this level; they pass through unchanged.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid bind address {addr:?}: {source}")]
    BindAddr {
        addr: String,
        source: std::net::AddrParseError,
    },
}
