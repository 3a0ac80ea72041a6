//! Custom extractors for Axum handlers.

pub mod json_payload;
pub mod query_params;

pub use json_payload::JsonPayload;
pub use query_params::QueryParams;
