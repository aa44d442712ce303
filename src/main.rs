use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use chat_bridge::config::BridgeConfig;
use chat_bridge::routes;
use chat_bridge::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = BridgeConfig::from_env()?;
    let addr = config.bind_addr;
    let state = std::sync::Arc::new(AppState::new(config));

    let cors = CorsLayer::very_permissive();
    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("chat bridge listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
