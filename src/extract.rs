//! # Lenient JSON Extractor
//!
//! Axum's `Json<T>` rejects a request whose body isn't valid JSON for `T`.
//! Product writes are more forgiving: only the first JSON value in the body
//! is decoded, and an undecodable body is logged and replaced by
//! `T::default()`, so a create with a garbage body inserts a zero-valued
//! product instead of failing.

use crate::error::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON body that falls back to `T::default()` when decoding fails
///
/// Unlike `Json<T>`, this does not require a `Content-Type: application/json`
/// request header.
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientJson<T>(pub T);

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Only a failure to read the body at all (e.g. over the size limit) rejects
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        // Decode the first JSON value only; trailing bytes are left unread
        match serde_json::Deserializer::from_slice(&bytes).into_iter::<T>().next() {
            Some(Ok(value)) => Ok(LenientJson(value)),
            Some(Err(e)) => {
                tracing::warn!("Ignoring undecodable request body: {}", e);
                Ok(LenientJson(T::default()))
            }
            None => {
                tracing::warn!("Ignoring empty request body");
                Ok(LenientJson(T::default()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::ProductInput;
    use axum::body::Body;

    async fn extract(body: &'static str) -> ProductInput {
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(body))
            .unwrap();

        let LenientJson(input) = LenientJson::<ProductInput>::from_request(req, &())
            .await
            .unwrap();
        input
    }

    #[tokio::test]
    async fn test_valid_body_is_decoded() {
        let input = extract(r#"{"name": "Widget", "quantity": 5}"#).await;

        assert_eq!(input.name, "Widget");
        assert_eq!(input.quantity, 5);
    }

    #[tokio::test]
    async fn test_trailing_data_after_first_value_is_ignored() {
        let input = extract(r#"{"name": "Widget", "quantity": 5}{"x": 1} trailing"#).await;

        assert_eq!(input.name, "Widget");
        assert_eq!(input.quantity, 5);
    }

    #[tokio::test]
    async fn test_garbage_body_falls_back_to_default() {
        assert_eq!(extract("not json at all").await, ProductInput::default());
    }

    #[tokio::test]
    async fn test_empty_body_falls_back_to_default() {
        assert_eq!(extract("").await, ProductInput::default());
    }
}
