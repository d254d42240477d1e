//! services/api/src/bin/api.rs

use api_lib::{
    adapters::build_generation_service,
    config::Config,
    error::ApiError,
    web::{build_router, state::AppState},
};
use flashcard_core::FlashcardGenerator;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    // A missing provider credential stops the process here, before anything binds.
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Initialize the Generation Adapter ---
    let generation_service = build_generation_service(&config);
    info!(
        provider = config.provider.name(),
        model = %config.generation_model,
        timeout_secs = config.generation_timeout.as_secs(),
        "Text generation provider configured"
    );
    let generator = FlashcardGenerator::new(generation_service, config.generation_timeout);

    // --- 3. Build the Shared AppState & Router ---
    let app_state = Arc::new(AppState::new(config.clone(), generator));
    let app = build_router(app_state)?;

    // --- 4. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
