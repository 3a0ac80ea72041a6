//! Query string extractor that reports rejections in the standard error format.

use crate::errors::AppError;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

/// Query string extractor.
///
/// Behaves like [`axum::extract::Query`] but a string that does not
/// deserialize (a repeated key, a value of the wrong shape) becomes an
/// [`AppError`] with the `{code, error, message}` body.
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(QueryParams(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, routing::get};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Paging {
        page: Option<String>,
    }

    async fn echo(QueryParams(params): QueryParams<Paging>) -> String {
        params.page.unwrap_or_default()
    }

    fn app() -> Router {
        Router::new().route("/", get(echo))
    }

    fn get_uri(uri: &str) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_accepts_query_string() {
        let response = app().oneshot(get_uri("/?page=2")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"2");
    }

    #[tokio::test]
    async fn test_missing_fields_are_allowed() {
        let response = app().oneshot(get_uri("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_repeated_key_uses_error_body() {
        let response = app().oneshot(get_uri("/?page=1&page=2")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "QUERY_EXTRACTION");
        assert_eq!(body["code"], 1002);
    }
}
