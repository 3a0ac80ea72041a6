//! Products API routes

use axum::Router;
use axum_helpers::api_key_middleware;
use domain_products::{ProductService, handlers};

use crate::state::AppState;

/// Create products router, guarded by the API key
pub fn router(state: &AppState) -> Router {
    let service = ProductService::new(state.repository.clone())
        .with_search_scope(state.config.search_scope);

    handlers::router(service).layer(axum::middleware::from_fn_with_state(
        state.config.api_key.clone(),
        api_key_middleware,
    ))
}
