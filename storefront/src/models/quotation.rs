use ledger_core::{DocumentLedger, LineItem};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::item::WireLineItem;
use super::user::CurrentUser;

/// Payload for `POST /add-quotation` and `PUT /update-quotation/{id}`.
///
/// The backend expects camelCase keys here, unlike the purchase endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct QuotationPayload {
    #[serde(rename = "CustomerName")]
    pub customer_name: String,
    #[serde(rename = "mobileNumber")]
    pub mobile_number: String,
    #[serde(rename = "quotationNumber")]
    pub quotation_number: String,
    #[serde(rename = "quotationDate")]
    pub quotation_date: String,
    pub categories: String,
    pub products: Vec<WireLineItem>,
    #[serde(rename = "totalPrice", with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    pub location: String,
    #[serde(rename = "createdBy")]
    pub created_by: String,
}

impl QuotationPayload {
    pub fn from_ledger(ledger: &DocumentLedger, user: &CurrentUser) -> Self {
        Self {
            customer_name: ledger.party_name.clone(),
            mobile_number: ledger.contact_number.clone(),
            quotation_number: ledger.document_number.clone(),
            quotation_date: ledger.date.format("%Y-%m-%d").to_string(),
            categories: ledger.category.clone(),
            products: ledger.items.iter().map(WireLineItem::from).collect(),
            total_price: ledger.total,
            location: user.location.clone(),
            created_by: user.username.clone(),
        }
    }
}

/// Row of `GET /quotation-list/{location}/{category}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotationRecord {
    pub id: i64,
    pub quotation_number: String,
    pub customer_name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub mobile_number: String,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total: Decimal,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub created_by: String,
}

impl QuotationRecord {
    pub fn haystack(&self) -> Vec<String> {
        vec![
            self.quotation_number.clone(),
            self.customer_name.clone(),
            self.date.clone(),
            self.mobile_number.clone(),
            self.total.to_string(),
            self.location.clone(),
            self.created_by.clone(),
        ]
    }
}

#[derive(Debug, Deserialize)]
pub struct QuotationListResponse {
    #[serde(default)]
    pub quotations: Vec<QuotationRecord>,
}

/// `GET /quotation-details/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotationDetails {
    pub customer_name: String,
    #[serde(default)]
    pub mobile_number: String,
    pub quotation_number: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub products: Vec<DetailsItem>,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total: Decimal,
    #[serde(default)]
    pub created_by: String,
}

/// Line item as the details endpoints return it.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailsItem {
    pub product_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
}

impl From<&DetailsItem> for LineItem {
    /// The subtotal is rederived from quantity × price rather than trusting
    /// the stored column.
    fn from(item: &DetailsItem) -> Self {
        LineItem::new(
            item.product_name.clone(),
            item.description.clone(),
            item.quantity,
            item.price,
        )
    }
}
