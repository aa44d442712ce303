use chat_bridge::config::BridgeConfig;
use chat_bridge::services::relay::{
    CHAT_FALLBACK_BODY, HEALTH_ERROR_BODY, PROXY_ERROR_BODY, Relay,
};

use axum::Router;
use axum::body::{Body, Bytes};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::get;

async fn upstream_status(Path(code): Path<u16>) -> Response {
    let status = StatusCode::from_u16(code).unwrap();
    Response::builder()
        .status(status)
        .header("content-type", "text/plain")
        .body(Body::from(format!("status {code}")))
        .unwrap()
}

async fn upstream_bare() -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .body(Body::from("bare"))
        .unwrap()
}

async fn spawn_upstream() -> String {
    let app = Router::new()
        .route("/status/{code}", get(upstream_status))
        .route("/bare", get(upstream_bare));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn unreachable_base() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn relay_for(base: &str) -> Relay {
    Relay::new(BridgeConfig {
        upstream_base: base.to_string(),
        chat_url: format!("{base}/chat"),
        api_key: None,
        bind_addr: "127.0.0.1:0".parse().unwrap(),
    })
}

#[tokio::test]
async fn forward_is_a_passthrough_for_sampled_status_codes() {
    let base = spawn_upstream().await;
    let relay = relay_for(&base);

    for code in [200u16, 201, 400, 404, 418, 500, 503] {
        let result = relay.forward(&format!("status/{code}"), None).await;
        assert_eq!(result.status.as_u16(), code, "status for {code}");
        assert_eq!(result.content_type, "text/plain");
        assert_eq!(result.body, Bytes::from(format!("status {code}")));
        assert!(!result.bridge_error);
    }
}

#[tokio::test]
async fn forward_defaults_content_type_when_upstream_omits_it() {
    let base = spawn_upstream().await;
    let relay = relay_for(&base);

    let result = relay.forward("bare", None).await;
    assert_eq!(result.status, StatusCode::OK);
    assert_eq!(result.content_type, "text/plain");
    assert_eq!(result.body, Bytes::from_static(b"bare"));
}

#[tokio::test]
async fn each_operation_has_its_own_fallback() {
    let base = unreachable_base().await;
    let relay = relay_for(&base);

    let generic = relay.forward("anything", None).await;
    assert_eq!(generic.status, StatusCode::BAD_GATEWAY);
    assert_eq!(generic.content_type, "text/plain");
    assert_eq!(generic.body, Bytes::from_static(PROXY_ERROR_BODY.as_bytes()));
    assert!(generic.bridge_error);

    let health = relay.forward_health().await;
    assert_eq!(health.status, StatusCode::BAD_GATEWAY);
    assert_eq!(health.body, Bytes::from_static(HEALTH_ERROR_BODY.as_bytes()));
    assert!(health.bridge_error);

    let chat = relay
        .forward_chat(Bytes::from_static(br#"{"message":"hello"}"#))
        .await;
    assert_eq!(chat.status, StatusCode::OK);
    assert_eq!(chat.content_type, "application/json");
    assert_eq!(chat.body, Bytes::from_static(CHAT_FALLBACK_BODY.as_bytes()));
    assert!(chat.bridge_error);
}
