use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inventory record as the backend stores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub product_name: String,
    #[serde(default)]
    pub description: String,
    pub quantity: i64,
    #[serde(default)]
    pub status: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub selling_price: Option<Decimal>,
    pub categories: String,
    pub location: String,
}

impl Product {
    /// Field values the list view's substring filter searches over.
    pub fn haystack(&self) -> Vec<String> {
        vec![
            self.product_name.clone(),
            self.description.clone(),
            self.quantity.to_string(),
            self.status.clone(),
            self.price.to_string(),
            self.categories.clone(),
            self.location.clone(),
        ]
    }
}

#[derive(Debug, Deserialize)]
pub struct InventoryResponse {
    #[serde(default)]
    pub inventory: Vec<Product>,
}

/// Payload for `POST /add` and `PUT /update/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct ProductPayload {
    pub product_name: String,
    pub description: String,
    pub quantity: i64,
    pub status: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub categories: String,
    pub location: String,
}

/// Payload for `PUT /update-stock`.
#[derive(Debug, Clone, Serialize)]
pub struct StockUpdate {
    pub id: i64,
    pub quantity: i64,
}
