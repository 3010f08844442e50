use ledger_core::LineItem;
use rust_decimal::Decimal;
use serde::Serialize;

/// Line item in the backend's document wire format.
///
/// Purchases, quotations and invoices all share these keys, including the
/// backend's mixed naming (`unitCost` next to `sub_total`).
#[derive(Debug, Clone, Serialize)]
pub struct WireLineItem {
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub qty: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "unitCost", with = "rust_decimal::serde::float")]
    pub unit_cost: Decimal,
    #[serde(rename = "sub_total", with = "rust_decimal::serde::float")]
    pub sub_total: Decimal,
}

impl From<&LineItem> for WireLineItem {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            qty: item.quantity,
            price: item.unit_price,
            unit_cost: item.unit_price,
            sub_total: item.subtotal,
        }
    }
}
