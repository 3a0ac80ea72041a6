//! API routes module

pub mod products;

use axum::{Router, routing::get};
use axum_helpers::{create_router, health_router};

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub const WELCOME_MESSAGE: &str =
    "Welcome to the Product API! Go to /api/products to see all products.";

/// Create all API routes (nested under `/api`)
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// Routes served at the root without an API key
pub fn public_routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .merge(health_router(state.config.app))
}

/// The complete application router
pub fn app(state: &AppState) -> Router {
    create_router::<ApiDoc>(routes(state), public_routes(state), &state.config.cors)
}

async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}
