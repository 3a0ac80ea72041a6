//! Shared-secret authentication.
//!
//! Requests carry the secret in the `x-api-key` header. The expected value is
//! loaded from `API_KEY`; when it is not configured the gate lets everything
//! through.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{ApiKeyConfig, api_key_middleware};
//! use core_config::FromEnv;
//!
//! let config = ApiKeyConfig::from_env()?;
//! let protected = Router::new()
//!     .route("/api/products", get(handler))
//!     .layer(axum::middleware::from_fn_with_state(config, api_key_middleware));
//! ```

pub mod config;
pub mod middleware;

pub use config::ApiKeyConfig;
pub use middleware::{API_KEY_HEADER, UNAUTHORIZED_MESSAGE, api_key_middleware};
