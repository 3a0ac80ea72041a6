//! Products API - REST server over an in-memory catalog

use axum_helpers::server::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    if config.api_key.is_disabled() {
        warn!("API_KEY_DISABLED is set, product routes are open to every caller");
    } else if !config.api_key.has_key() {
        warn!("API_KEY is not set, every product request will be rejected");
    }

    let state = AppState::seeded(config);
    info!(
        search_scope = %state.config.search_scope,
        "Product catalog loaded with seed data"
    );

    let app = api::app(&state);

    info!(
        "Starting Products API on port {}",
        state.config.server.port
    );

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
