mod completion;
mod config;
mod db;
mod errors;
mod feedback;
mod leads;
mod models;
mod notify;
mod preferences;
mod recommendations;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::completion::CompletionClient;
use crate::config::Config;
use crate::db::create_pool;
use crate::notify::ChangeNotifier;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            // Crate name with hyphens does not match the tracing target
            let target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{target}={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Planora API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize the completion client
    let completions = CompletionClient::new(
        config.completion_api_url.clone(),
        config.completion_api_key.clone(),
    )?;
    info!("Completion client initialized (model: {})", completion::MODEL);

    // Change notifier for refresh-trigger subscriptions
    let changes = ChangeNotifier::new();

    // Build app state
    let state = AppState {
        db,
        completions,
        changes,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
