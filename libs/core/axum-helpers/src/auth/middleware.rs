use super::config::ApiKeyConfig;
use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// Header carrying the shared secret
pub const API_KEY_HEADER: &str = "x-api-key";

pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized: Missing or invalid API key";

/// API key middleware
///
/// Rejects the request with 401 unless the `x-api-key` header matches the
/// configured key. Without a configured key every request is rejected,
/// unless the gate was explicitly disabled.
///
/// # Example
///
/// ```ignore
/// use axum_helpers::{ApiKeyConfig, api_key_middleware};
///
/// let routes = Router::new()
///     .route("/api/products", get(handler))
///     .layer(axum::middleware::from_fn_with_state(
///         ApiKeyConfig::new("secret"),
///         api_key_middleware,
///     ));
/// ```
pub async fn api_key_middleware(
    State(config): State<ApiKeyConfig>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if !config.accepts(presented) {
        tracing::debug!(
            header_present = presented.is_some(),
            "Rejected request with missing or invalid API key"
        );
        return Err(AppError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string()));
    }

    Ok(next.run(request).await)
}
