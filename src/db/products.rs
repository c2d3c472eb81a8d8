//! # Product Database Operations
//!
//! One function per SQL statement against the `products` table. Each takes
//! the pool explicitly; none of them open a transaction, so concurrent
//! writers to the same row race and the last write wins.

use crate::db::models::{Product, ProductInput};
use crate::error::{AppError, AppResult};
use sqlx::SqlitePool;

/// Fetch every product
///
/// ## Returns
/// - Empty vector if the table has no rows
/// - Error only if the database operation fails
pub async fn list_products(pool: &SqlitePool) -> AppResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>("SELECT id, name, quantity FROM products")
        .fetch_all(pool) // fetch_all returns Vec, empty if no rows
        .await?;

    Ok(products)
}

/// Find a single product by its id
///
/// ## Error Handling
/// Returns NotFound if no row has this id
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> AppResult<Product> {
    let product =
        sqlx::query_as::<_, Product>("SELECT id, name, quantity FROM products WHERE id = ?")
            .bind(id)
            .fetch_one(pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => AppError::NotFound(format!("Product {} not found", id)),
                _ => AppError::Database(e),
            })?;

    Ok(product)
}

/// Insert a new product and return it with its generated id
pub async fn create_product(pool: &SqlitePool, input: ProductInput) -> AppResult<Product> {
    let id =
        sqlx::query_scalar::<_, i64>("INSERT INTO products (name, quantity) VALUES (?, ?) RETURNING id")
            .bind(&input.name)
            .bind(input.quantity)
            .fetch_one(pool)
            .await?;

    tracing::debug!(id, name = %input.name, "product created");

    Ok(input.with_id(id))
}

/// Overwrite name and quantity of the product with this id
///
/// No existence check: updating a missing id matches zero rows and still
/// succeeds. Returns the number of rows affected.
pub async fn update_product(pool: &SqlitePool, id: i64, input: &ProductInput) -> AppResult<u64> {
    let result = sqlx::query("UPDATE products SET name = ?, quantity = ? WHERE id = ?")
        .bind(&input.name)
        .bind(input.quantity)
        .bind(id)
        .execute(pool)
        .await?;

    tracing::debug!(id, rows = result.rows_affected(), "product updated");

    Ok(result.rows_affected())
}

/// Delete the product with this id
///
/// Deleting a missing id is not an error. Returns the number of rows affected.
pub async fn delete_product(pool: &SqlitePool, id: i64) -> AppResult<u64> {
    let result = sqlx::query("DELETE FROM products WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    tracing::debug!(id, rows = result.rows_affected(), "product deleted");

    Ok(result.rows_affected())
}
