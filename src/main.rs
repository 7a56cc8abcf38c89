use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use message_relay::config::AppConfig;
use message_relay::routes;
use message_relay::services::exchange_log::ExchangeLog;
use message_relay::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "message_relay=info,tower_http=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let exchange_log = match &config.chat_log_file {
        Some(path) => {
            let log = ExchangeLog::open(path.clone()).await?;
            info!(path = %path.display(), "exchange logging enabled");
            Some(log)
        }
        None => None,
    };

    let state = Arc::new(AppState::new(&config, exchange_log));

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("message relay listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
