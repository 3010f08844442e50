use ledger_core::DocumentLedger;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::item::WireLineItem;
use super::user::CurrentUser;

/// Payload for `POST /add-purchase`.
#[derive(Debug, Clone, Serialize)]
pub struct PurchasePayload {
    pub supplier_name: String,
    pub mobile_number: String,
    pub purchase_number: String,
    pub purchase_date: String,
    pub categories: String,
    pub products: Vec<WireLineItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub paid: Decimal,
    pub location: String,
    pub created_by: String,
}

impl PurchasePayload {
    pub fn from_ledger(ledger: &DocumentLedger, user: &CurrentUser) -> Self {
        Self {
            supplier_name: ledger.party_name.clone(),
            mobile_number: ledger.contact_number.clone(),
            purchase_number: ledger.document_number.clone(),
            purchase_date: ledger.date.format("%Y-%m-%d").to_string(),
            categories: ledger.category.clone(),
            products: ledger.items.iter().map(WireLineItem::from).collect(),
            total_price: ledger.total,
            paid: ledger.paid,
            location: user.location.clone(),
            created_by: user.username.clone(),
        }
    }
}

/// Row of `GET /purchase-list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub id: i64,
    pub purchase_number: String,
    pub supplier_name: String,
    pub purchase_date: String,
    #[serde(default)]
    pub mobile_number: String,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub paid: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub due: Decimal,
    #[serde(default)]
    pub payment_status: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub created_by: String,
}

impl PurchaseRecord {
    pub fn haystack(&self) -> Vec<String> {
        vec![
            self.purchase_number.clone(),
            self.supplier_name.clone(),
            self.purchase_date.clone(),
            self.mobile_number.clone(),
            self.total.to_string(),
            self.paid.to_string(),
            self.due.to_string(),
            self.payment_status.clone(),
            self.location.clone(),
            self.created_by.clone(),
        ]
    }
}

#[derive(Debug, Deserialize)]
pub struct PurchaseListResponse {
    #[serde(default)]
    pub purchase: Vec<PurchaseRecord>,
}
