//! Products Domain
//!
//! This module provides an in-memory product catalog: CRUD, filtering,
//! text search, pagination and aggregate counts.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌────────────────────────┐
//! │   Service   │ ──► │ Validation, Query,     │
//! └──────┬──────┘     │ Stats (pure functions) │
//!        │            └────────────────────────┘
//! ┌──────▼──────┐
//! │ Repository  │  ← Product store (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! // Create a seeded repository and service
//! let repository = InMemoryProductRepository::with_seed();
//! let service = ProductService::new(repository);
//!
//! // Create Axum router
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod id;
pub mod models;
pub mod query;
pub mod repository;
pub mod seed;
pub mod service;
pub mod stats;
pub mod validation;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use id::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use models::{
    CategoryCounts, DeletedProduct, Product, ProductDraft, ProductPage, ProductPatch, StockStats,
};
pub use query::{ProductQuery, SearchQuery, SearchScope};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use seed::seed_products;
pub use service::ProductService;
