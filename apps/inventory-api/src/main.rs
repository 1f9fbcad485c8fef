use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    let state = AppState::new(config);

    if state.config.seed_sample_data {
        state.items.seed_sample_data().await?;
    } else {
        info!("Sample data disabled, starting with an empty store");
    }

    // Build router with API routes
    let api_routes = api::routes(&state);

    // Create a router with OpenAPI docs
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes, &state.config.cors)?;

    // Merge health endpoints
    let app = router.merge(health_router(state.config.app));

    info!(
        "Starting Inventory API with graceful shutdown ({:?} timeout)",
        state.config.server.shutdown_timeout
    );

    let items = state.items.clone();
    create_production_app(app, &state.config.server, async move {
        match items.count_items().await {
            Ok(count) => info!("Shutting down: discarding {} in-memory items", count),
            Err(e) => tracing::warn!("Could not read item count during shutdown: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Inventory API shutdown complete");
    Ok(())
}
