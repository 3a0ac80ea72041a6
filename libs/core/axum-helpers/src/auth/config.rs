//! Configuration types for axum-helpers.
//!
//! Implements the `FromEnv` trait from `core_config`, like the other
//! configuration structs in the workspace.

use core_config::{ConfigError, FromEnv, env_flag, env_optional};

/// Shared API key configuration.
///
/// Loaded from environment variables:
/// - `API_KEY` (optional) - expected value of the `x-api-key` header.
///   Unset or blank means no key can match, so every request is rejected.
/// - `API_KEY_DISABLED` (default: false) - skip the check entirely.
///
/// # Example
///
/// ```ignore
/// use axum_helpers::ApiKeyConfig;
/// use core_config::FromEnv;
///
/// let config = ApiKeyConfig::from_env()?;
///
/// // Manual construction (for testing)
/// let config = ApiKeyConfig::new("secret");
/// ```
#[derive(Clone, Default)]
pub struct ApiKeyConfig {
    key: Option<String>,
    disabled: bool,
}

impl ApiKeyConfig {
    /// Require the given key on every request.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            disabled: false,
        }
    }

    /// Let every request through.
    pub fn disabled() -> Self {
        Self {
            key: None,
            disabled: true,
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn has_key(&self) -> bool {
        self.key.is_some()
    }

    /// Whether a presented header value grants access.
    pub fn accepts(&self, presented: Option<&str>) -> bool {
        if self.disabled {
            return true;
        }
        match (&self.key, presented) {
            (Some(expected), Some(given)) => expected == given,
            _ => false,
        }
    }
}

// Keep the secret out of logs.
impl std::fmt::Debug for ApiKeyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyConfig")
            .field("has_key", &self.has_key())
            .field("disabled", &self.disabled)
            .finish()
    }
}

impl FromEnv for ApiKeyConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            key: env_optional("API_KEY"),
            disabled: env_flag("API_KEY_DISABLED", false)?,
        })
    }
}
