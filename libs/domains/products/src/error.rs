use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "Product not found";

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => {
                tracing::debug!(product_id = %id, "Product lookup missed");
                AppError::NotFound(NOT_FOUND_MESSAGE.to_string())
            }
            ProductError::Validation(msg) => AppError::Validation(msg),
            ProductError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<serde_json::Error> for ProductError {
    fn from(err: serde_json::Error) -> Self {
        ProductError::Internal(err.to_string())
    }
}
