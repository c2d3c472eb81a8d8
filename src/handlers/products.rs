//! # Product Handlers
//!
//! One handler per (method, path) on the product resource. Each parses its
//! inputs, runs exactly one statement from `db::products`, and returns JSON.
//!
//! ## Routes
//! - `GET    /product`      → `list_products`
//! - `GET    /product/{id}` → `get_product`
//! - `POST   /product`      → `create_product`
//! - `PUT    /product/{id}` → `update_product`
//! - `DELETE /product/{id}` → `delete_product`

use crate::db::models::{Product, ProductInput};
use crate::db::products;
use crate::error::{AppError, AppResult};
use crate::extract::LenientJson;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

/// Fixed body returned by `delete_product`
pub const DELETED_MESSAGE: &str = "Product Deleted";

/// Parse the `{id}` path segment as a product id
///
/// The segment is taken as a raw string so a malformed id produces our own
/// 400 body instead of axum's plain-text path rejection.
fn parse_product_id(raw: &str) -> AppResult<i64> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("invalid product id '{}'", raw)))
}

/// List all products
///
/// ## Response
/// A JSON array, `[]` when the table is empty.
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = products::list_products(&state.db).await?;

    Ok(Json(products))
}

/// Get one product by id
///
/// ## Errors
/// - 400 if `id` isn't an integer
/// - 404 if no product has this id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let id = parse_product_id(&id)?;
    let product = products::find_by_id(&state.db, id).await?;

    Ok(Json(product))
}

/// Create a product
///
/// The database assigns the id; the response is the stored record.
pub async fn create_product(
    State(state): State<AppState>,
    LenientJson(input): LenientJson<ProductInput>,
) -> AppResult<Json<Product>> {
    let product = products::create_product(&state.db, input).await?;

    Ok(Json(product))
}

/// Replace name and quantity of a product
///
/// The response echoes the body as decoded, including whatever `id` it
/// carried (0 if none); the row is not re-read. Only the path id selects
/// the row. Updating an id that doesn't exist still returns 200.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    LenientJson(body): LenientJson<Product>,
) -> AppResult<Json<Product>> {
    let id = parse_product_id(&id)?;
    products::update_product(&state.db, id, &ProductInput::from(&body)).await?;

    Ok(Json(body))
}

/// Delete a product
///
/// Always answers `"Product Deleted"`, whether or not the row existed.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<&'static str>> {
    let id = parse_product_id(&id)?;
    products::delete_product(&state.db, id).await?;

    Ok(Json(DELETED_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product_id() {
        assert_eq!(parse_product_id("17").unwrap(), 17);
        assert!(matches!(parse_product_id("abc"), Err(AppError::BadRequest(_))));
        assert!(matches!(parse_product_id("1.5"), Err(AppError::BadRequest(_))));
        assert!(matches!(parse_product_id(""), Err(AppError::BadRequest(_))));
    }
}
