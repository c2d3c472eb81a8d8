//! # Database Models
//!
//! Data structures mapping to the `products` table and to the JSON bodies
//! clients send.

use serde::{Deserialize, Serialize};

/// A row of the `products` table
///
/// ## Derive Macros
/// - `Serialize`/`Deserialize`: JSON conversion for API responses
/// - `sqlx::FromRow`: maps a selected row onto this struct by column name
///
/// Also decoded from update bodies, which are echoed back as sent, so
/// missing fields default to zero values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct Product {
    /// Primary key, generated by the database on insert and never changed
    pub id: i64,

    /// Product name, stored as given
    pub name: String,

    /// Units in stock, stored as given (no range checks)
    pub quantity: i64,
}

/// The client-writable part of a product
///
/// Used as the body of create and update requests. Missing fields fall back
/// to zero values (`""` and `0`), and any `id` in the body is ignored since
/// ids belong to the database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductInput {
    pub name: String,
    pub quantity: i64,
}

impl ProductInput {
    /// Attach an id, producing the full record shape returned to clients
    pub fn with_id(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            quantity: self.quantity,
        }
    }
}

impl From<&Product> for ProductInput {
    fn from(product: &Product) -> Self {
        ProductInput {
            name: product.name.clone(),
            quantity: product.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_ignores_client_supplied_id() {
        let input: ProductInput =
            serde_json::from_str(r#"{"id": 99, "name": "Widget", "quantity": 5}"#).unwrap();

        assert_eq!(input.with_id(1), Product { id: 1, name: "Widget".into(), quantity: 5 });
    }

    #[test]
    fn test_update_body_keeps_client_id_and_defaults_missing_fields() {
        let body: Product = serde_json::from_str(r#"{"id": 77, "name": "W"}"#).unwrap();
        assert_eq!(body, Product { id: 77, name: "W".into(), quantity: 0 });

        let body: Product = serde_json::from_str(r#"{"quantity": 2}"#).unwrap();
        assert_eq!(body.id, 0);
        assert_eq!(ProductInput::from(&body), ProductInput { name: String::new(), quantity: 2 });
    }

    #[test]
    fn test_input_missing_fields_default_to_zero_values() {
        let input: ProductInput = serde_json::from_str(r#"{"name": "Gadget"}"#).unwrap();

        assert_eq!(input.name, "Gadget");
        assert_eq!(input.quantity, 0);
    }
}
