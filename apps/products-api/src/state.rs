//! Application state management

use domain_products::InMemoryProductRepository;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub repository: InMemoryProductRepository,
}

impl AppState {
    /// State backed by the startup catalog
    pub fn seeded(config: crate::config::Config) -> Self {
        Self {
            config,
            repository: InMemoryProductRepository::with_seed(),
        }
    }
}
