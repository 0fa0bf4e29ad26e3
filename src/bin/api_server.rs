// API Server Binary Entry Point
//
// Purpose: Start the Axum API server over the weather scoring engine
// Usage: cargo run --features api --bin api_server

use climate_scorer::{AppState, ServerSettings, create_router};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "climate_scorer=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    // Configuration from environment variables
    let settings = ServerSettings::from_env();

    tracing::info!("Configuration:");
    tracing::info!("  PORT: {}", settings.port);
    tracing::info!("  SCORING_CONFIG: {:?}", settings.scoring_config);
    tracing::info!("  LOCALIZATION_FILE: {:?}", settings.localization);
    tracing::info!("  OBSERVATION_SOURCE: {:?}", settings.observation_source);
    tracing::info!("  HISTORY_CAPACITY: {}", settings.history_capacity);

    tracing::info!("Initializing application state...");
    let state = AppState::new(&settings)?;
    tracing::info!("Application state initialized successfully");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await?;

    Ok(())
}
