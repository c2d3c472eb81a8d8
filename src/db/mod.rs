//! # Database Module
//!
//! - `models`: Data structures (Product, ProductInput)
//! - `products`: Queries against the `products` table
//!
//! The schema itself lives in `./migrations` and is applied by `AppState`.

pub mod models;
pub mod products;
