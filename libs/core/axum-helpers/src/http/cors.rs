use axum::http::{HeaderName, HeaderValue, Method};
use core_config::{ConfigError, FromEnv, env_optional};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// CORS configuration.
///
/// Loaded from environment variables:
/// - `CORS_ALLOWED_ORIGIN` (optional) - comma-separated list of origins.
///   Unset means any origin is allowed.
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<HeaderValue>,
}

impl CorsConfig {
    pub fn is_permissive(&self) -> bool {
        self.allowed_origins.is_empty()
    }

    /// Builds the layer matching this configuration.
    pub fn layer(&self) -> CorsLayer {
        if self.is_permissive() {
            create_permissive_cors_layer()
        } else {
            create_cors_layer(self.allowed_origins.clone())
        }
    }
}

impl FromEnv for CorsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let Some(raw) = env_optional("CORS_ALLOWED_ORIGIN") else {
            return Ok(Self::default());
        };

        let allowed_origins = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: e.to_string(),
            })?;

        Ok(Self { allowed_origins })
    }
}

/// Creates a CORS layer with common settings for API services.
///
/// # Returns
/// A configured `CorsLayer` with:
/// - Specified allowed origins
/// - Common HTTP methods (GET, POST, PUT, DELETE, OPTIONS)
/// - Content-Type, Accept and x-api-key headers
/// - 1 hour max age
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
            HeaderName::from_static(crate::auth::API_KEY_HEADER),
        ])
        .max_age(Duration::from_secs(3600))
}

/// Creates a permissive CORS layer.
///
/// Allows any origin.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
