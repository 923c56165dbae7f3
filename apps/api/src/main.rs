mod config;
mod enhance;
mod errors;
mod extract;
mod models;
mod routes;
mod state;
mod storage;

use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::{build_router, cors_layer};
use crate::state::AppState;
use crate::storage::JsonFileStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{crate_name}={level},tower_http={level}",
                crate_name = env!("CARGO_CRATE_NAME"),
                level = &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Editor API v{}", env!("CARGO_PKG_VERSION"));

    // Resumes saved by a previous run stay on disk but are not loaded.
    let store = JsonFileStore::new(config.storage_path.clone());
    info!("Resume snapshots written to {}", store.path().display());

    let state = AppState {
        store: Arc::new(store),
    };

    info!("CORS allowed origins: {:?}", config.allowed_origins);
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config.allowed_origins.clone()));

    let addr = config.socket_addr()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
