//! # Error Handling
//!
//! This module defines the application error type and converts it into
//! HTTP responses, so a failing query fails only the request that ran it.
//!
//! ## Status mapping
//! - `Database` → 500 (details logged, generic message returned)
//! - `NotFound` → 404
//! - `BadRequest` → 400
//! - `MethodNotAllowed` → 405

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-wide error type
///
/// The `#[from]` attribute on `Database` lets handlers and store functions
/// use `?` directly on SQLx results.
#[derive(Error, Debug)]
pub enum AppError {
    /// Database errors (SQLx library errors)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Resource not found errors (404)
    ///
    /// Used when a requested product or route doesn't exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request errors (400)
    ///
    /// Used when the client sends an unusable path parameter
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Path exists but not for this HTTP method (405)
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),
}

/// Convert AppError into an HTTP response
///
/// Handlers return `AppResult<T>`; Axum calls this for the `Err` case.
/// The body is always `{ "error": "<message>" }`.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Database(e) => {
                // Log detailed error for debugging, don't leak database internals
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::MethodNotAllowed(_) => (StatusCode::METHOD_NOT_ALLOWED, self.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("Product 7 not found".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Not found: Product 7 not found" })
        );
    }

    #[tokio::test]
    async fn test_database_error_hides_details() {
        let response = AppError::Database(sqlx::Error::PoolClosed).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({ "error": "Database error" }));
    }

    #[tokio::test]
    async fn test_bad_request_maps_to_400() {
        let response = AppError::BadRequest("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
