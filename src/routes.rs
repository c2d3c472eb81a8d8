//! # Router
//!
//! Maps (method, path) pairs to handlers and wraps them in the middleware
//! stack. Kept apart from `main` so tests can drive the exact router the
//! server runs.

use crate::handlers::fallback::{method_not_allowed, not_found};
use crate::handlers::health::health_check;
use crate::handlers::products::*;
use crate::middleware::json_content_type::json_content_type;
use crate::state::AppState;
use axum::{middleware as axum_middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the application router over the given state
pub fn router(state: AppState) -> Router {
    // Allow browser clients from any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/product", get(list_products).post(create_product))
        .route(
            "/product/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        // Layers run in reverse order: trace sees the request first.
        // CORS answers preflights itself, so the content-type stamp wraps it.
        .layer(cors)
        .layer(axum_middleware::from_fn(json_content_type))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
