use crate::error::AppError;
use axum::http::{Method, Uri};

/// Catch-all for paths no route matches, answered with the usual JSON error body
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}

/// Known path, unsupported method
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("{} {}", method, uri.path()))
}
