//! Line items and the staging input that validates them.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// A single priced entry on a document.
///
/// The subtotal is derived from quantity × unit price and is recomputed
/// whenever either factor changes; it is never stored independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
}

impl LineItem {
    pub fn new(name: String, description: String, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            name,
            description,
            quantity,
            unit_price,
            subtotal: quantity * unit_price,
        }
    }
}

/// Raw form input staged for a document.
///
/// Quantity and price arrive as strings straight from the form; nothing
/// reaches a ledger until [`ItemInput::validate`] accepts it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemInput {
    pub name: String,
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
}

impl ItemInput {
    /// Validate the staged input and build the line item it describes.
    ///
    /// Rejections carry the exact message shown to the operator and leave
    /// every ledger untouched.
    pub fn validate(&self) -> Result<LineItem, LedgerError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(LedgerError::EmptyName);
        }
        let quantity = parse_positive(&self.quantity).ok_or(LedgerError::InvalidQuantity)?;
        let unit_price = parse_positive(&self.unit_price).ok_or(LedgerError::InvalidPrice)?;

        Ok(LineItem::new(
            name.to_string(),
            self.description.trim().to_string(),
            quantity,
            unit_price,
        ))
    }
}

/// Parse a strictly positive decimal; `None` for unparseable, zero or
/// negative input.
fn parse_positive(raw: &str) -> Option<Decimal> {
    let value = Decimal::from_str(raw.trim()).ok()?;
    (value > Decimal::ZERO).then_some(value)
}
