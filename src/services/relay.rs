// src/services/relay.rs
use axum::body::{Body, Bytes};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use crate::config::BridgeConfig;
use crate::error::RelayError;

pub const TEXT_PLAIN: &str = "text/plain";
pub const APPLICATION_JSON: &str = "application/json";

// Fixed bodies substituted when the upstream cannot be reached.
pub const PROXY_ERROR_BODY: &str = "bridge proxy error";
pub const HEALTH_ERROR_BODY: &str = "bridge health proxy error";
pub const CHAT_FALLBACK_BODY: &str = r#"{"answer":"Bridge error. Please try again."}"#;

/// Set on the chat fallback so callers can tell "relay could not reach
/// upstream" apart from a genuine upstream answer, while the body keeps
/// the shape existing clients expect.
pub const BRIDGE_ERROR_HEADER: &str = "x-bridge-error";
pub const BRIDGE_ERROR_VALUE: &str = "upstream-unreachable";

/// One relayed response: the upstream's status, content-type, and body
/// verbatim, or a fixed fallback. Built fresh per invocation, never cached.
#[derive(Clone, Debug)]
pub struct RelayResult {
    pub status: StatusCode,
    pub content_type: String,
    pub body: Bytes,
    /// True when the body is a bridge-substituted fallback rather than
    /// something the upstream produced.
    pub bridge_error: bool,
}

impl RelayResult {
    fn passthrough(status: StatusCode, content_type: String, body: Bytes) -> Self {
        Self {
            status,
            content_type,
            body,
            bridge_error: false,
        }
    }

    fn fallback(status: StatusCode, content_type: &str, body: &'static str) -> Self {
        Self {
            status,
            content_type: content_type.to_string(),
            body: Bytes::from_static(body.as_bytes()),
            bridge_error: true,
        }
    }
}

impl IntoResponse for RelayResult {
    fn into_response(self) -> Response {
        let mut builder = Response::builder()
            .status(self.status)
            .header(header::CONTENT_TYPE, self.content_type);
        if self.bridge_error {
            builder = builder.header(BRIDGE_ERROR_HEADER, BRIDGE_ERROR_VALUE);
        }
        builder
            .body(Body::from(self.body))
            .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
    }
}

/// Stateless single-hop relay. Each operation issues exactly one outbound
/// request and totalizes transport failure into a fixed fallback.
#[derive(Clone, Debug)]
pub struct Relay {
    config: BridgeConfig,
    http: reqwest::Client,
}

impl Relay {
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Upstream URL for generic forwarding: base + path + query, verbatim.
    pub fn upstream_url(&self, path: &str, query: Option<&str>) -> String {
        match query {
            Some(q) => format!("{}/{}?{}", self.config.upstream_base, path, q),
            None => format!("{}/{}", self.config.upstream_base, path),
        }
    }

    /// GET pass-through for any path under the bridge.
    pub async fn forward(&self, path: &str, query: Option<&str>) -> RelayResult {
        let url = self.upstream_url(path, query);
        match self.get_passthrough(&url, TEXT_PLAIN).await {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(%url, %err, "generic forward failed");
                RelayResult::fallback(StatusCode::BAD_GATEWAY, TEXT_PLAIN, PROXY_ERROR_BODY)
            }
        }
    }

    /// GET pass-through fixed to the upstream's `/health`.
    pub async fn forward_health(&self) -> RelayResult {
        let url = format!("{}/health", self.config.upstream_base);
        match self.get_passthrough(&url, TEXT_PLAIN).await {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(%url, %err, "health forward failed");
                RelayResult::fallback(StatusCode::BAD_GATEWAY, TEXT_PLAIN, HEALTH_ERROR_BODY)
            }
        }
    }

    /// POST the raw chat body to the configured chat endpoint. Transport
    /// failure keeps the historical 200 + apologetic JSON body, marked with
    /// the bridge-error header.
    pub async fn forward_chat(&self, body: Bytes) -> RelayResult {
        let request_id = Uuid::new_v4();
        let mut request = self
            .http
            .post(&self.config.chat_url)
            .header(header::CONTENT_TYPE, APPLICATION_JSON)
            .body(body);
        if let Some(key) = &self.config.api_key {
            request = request.header("x-api-key", key.clone());
        }

        match self.execute(request, APPLICATION_JSON).await {
            Ok(result) => {
                tracing::info!(%request_id, status = %result.status, "chat forwarded");
                result
            }
            Err(err) => {
                tracing::warn!(%request_id, url = %self.config.chat_url, %err, "chat forward failed");
                RelayResult::fallback(StatusCode::OK, APPLICATION_JSON, CHAT_FALLBACK_BODY)
            }
        }
    }

    async fn get_passthrough(
        &self,
        url: &str,
        default_content_type: &str,
    ) -> Result<RelayResult, RelayError> {
        self.execute(self.http.get(url), default_content_type).await
    }

    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        default_content_type: &str,
    ) -> Result<RelayResult, RelayError> {
        let response = request.send().await?;

        // Convert through u16 so the relay does not care which `http`
        // version reqwest was built against.
        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::BAD_GATEWAY);
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(default_content_type)
            .to_string();
        let body = response.bytes().await?;

        Ok(RelayResult::passthrough(status, content_type, body))
    }
}
