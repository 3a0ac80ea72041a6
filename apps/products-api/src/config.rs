//! Configuration for Products API

use axum_helpers::{ApiKeyConfig, CorsConfig};
use core_config::{AppInfo, FromEnv, app_info, env_flag, server::ServerConfig};
use domain_products::SearchScope;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub api_key: ApiKeyConfig,
    pub cors: CorsConfig,
    pub search_scope: SearchScope,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let api_key = ApiKeyConfig::from_env()?;
        let cors = CorsConfig::from_env()?;

        let search_scope = if env_flag("SEARCH_INCLUDE_DESCRIPTION", false)? {
            SearchScope::NameAndDescription
        } else {
            SearchScope::Name
        };

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            api_key,
            cors,
            search_scope,
        })
    }
}
