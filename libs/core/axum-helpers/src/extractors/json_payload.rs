//! JSON body extractor that reports rejections in the standard error format.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// JSON body extractor.
///
/// Behaves like [`axum::Json`] but turns a rejection (missing content type,
/// syntax error, wrong shape) into an [`AppError`], so clients get the same
/// `{code, error, message}` body as every other failure.
///
/// Semantic checks are left to the domain layer; deserialize into
/// `serde_json::Value` when the domain needs to see the raw payload.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::JsonPayload;
///
/// async fn create(JsonPayload(body): JsonPayload<serde_json::Value>) -> String {
///     format!("got {} keys", body.as_object().map_or(0, |o| o.len()))
/// }
/// ```
pub struct JsonPayload<T>(pub T);

impl<T, S> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(JsonPayload(data))
    }
}
