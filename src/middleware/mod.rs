//! # Middleware Module
//!
//! Middleware intercepts HTTP requests and responses for cross-cutting
//! concerns. Each layer is attached in `routes::router`.
//!
//! ## Our Middleware
//! - `json_content_type`: Marks every response as `application/json`

pub mod json_content_type;
