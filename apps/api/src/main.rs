mod analysis;
mod config;
mod errors;
mod extract;
mod forms;
mod models;
mod render;
mod resume;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::ScoringRules;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting KG Designs API v{}", env!("CARGO_PKG_VERSION"));

    let rules = ScoringRules::load(config.scoring_rules_path.as_deref())
        .context("Failed to load scoring rules")?;
    match &config.scoring_rules_path {
        Some(path) => info!("Scoring rules loaded from {}", path.display()),
        None => info!("Using default scoring rules"),
    }
    info!(
        max_document_chars = config.limits.max_document_chars,
        max_body_bytes = config.limits.max_body_bytes,
        "Input limits configured"
    );

    let state = AppState::new(config.clone(), rules);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the marketing site domain

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
