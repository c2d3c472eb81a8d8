//! # JSON Content-Type Middleware
//!
//! Every response this service sends is JSON, including errors, unknown
//! routes and method mismatches. Rather than having each handler set the
//! header, this middleware stamps it on the way out.

use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};

/// Run the rest of the stack, then force `Content-Type: application/json`
///
/// Overrides any content type set by inner layers (axum's default 405
/// response, for instance). Never fails.
pub async fn json_content_type(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    response
}
