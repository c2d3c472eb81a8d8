//! # HTTP Request Handlers
//!
//! This module contains all the HTTP route handlers.
//!
//! ## Submodules
//! - `products`: CRUD endpoints for the product resource
//! - `health`: Health check endpoint (for monitoring)
//! - `fallback`: JSON 404 for unmatched paths
//!
//! ## Handler Pattern
//! Handlers are async functions that:
//! 1. Extract data from the request (path params, JSON body, shared state)
//! 2. Call a database operation
//! 3. Return `AppResult<Json<_>>`

pub mod fallback;
pub mod health;
pub mod products;
