use ledger_core::DocumentLedger;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::item::WireLineItem;
use super::quotation::DetailsItem;
use super::user::CurrentUser;

/// Payload for `POST /save-invoice`.
#[derive(Debug, Clone, Serialize)]
pub struct InvoicePayload {
    pub customer_name: String,
    pub mobile_number: String,
    pub invoice_number: String,
    pub invoice_date: String,
    pub categories: String,
    pub products: Vec<WireLineItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub paid: Decimal,
    pub location: String,
    pub created_by: String,
}

impl InvoicePayload {
    pub fn from_ledger(ledger: &DocumentLedger, user: &CurrentUser) -> Self {
        Self {
            customer_name: ledger.party_name.clone(),
            mobile_number: ledger.contact_number.clone(),
            invoice_number: ledger.document_number.clone(),
            invoice_date: ledger.date.format("%Y-%m-%d").to_string(),
            categories: ledger.category.clone(),
            products: ledger.items.iter().map(WireLineItem::from).collect(),
            total_price: ledger.total,
            paid: ledger.paid,
            location: user.location.clone(),
            created_by: user.username.clone(),
        }
    }
}

/// Row of `GET /invoice-list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub id: i64,
    pub invoice_number: String,
    pub customer_name: String,
    #[serde(default)]
    pub invoice_date: String,
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

impl InvoiceRecord {
    pub fn haystack(&self) -> Vec<String> {
        vec![
            self.invoice_number.clone(),
            self.customer_name.clone(),
            self.invoice_date.clone(),
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
pub struct InvoiceListResponse {
    #[serde(default)]
    pub invoices: Vec<InvoiceRecord>,
}

/// `GET /invoice-details/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceDetails {
    pub customer_name: String,
    #[serde(default)]
    pub mobile_number: String,
    pub invoice_number: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub products: Vec<DetailsItem>,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub paid: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub due: Decimal,
    #[serde(default)]
    pub created_by: String,
}
