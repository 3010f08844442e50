//! Due-payment calls against the backend.
//!
//! The due amount is authoritative on the backend for both invoices and
//! purchases; it is fetched fresh whenever a reconciliation round opens and
//! again before a settlement is written.

use anyhow::Result;
use rust_decimal::Decimal;

use super::backend::{Backend, MessageResponse};
use crate::models::payment::{DueAmount, SettlementPayload};

#[derive(Clone)]
pub struct PaymentsClient {
    backend: Backend,
}

impl PaymentsClient {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// `GET /due-payments/{id}`.
    pub async fn invoice_due(&self, id: i64) -> Result<Decimal> {
        let due: DueAmount = self.backend.get_json(&format!("/due-payments/{id}")).await?;
        Ok(due.0)
    }

    /// `PUT /update-due-payments/{id}`.
    pub async fn settle_invoice(&self, id: i64, settlement: &SettlementPayload) -> Result<String> {
        let response: MessageResponse = self
            .backend
            .put_json(&format!("/update-due-payments/{id}"), settlement)
            .await?;
        Ok(response.message)
    }

    /// `GET /due-purchase-payments/{id}`.
    pub async fn purchase_due(&self, id: i64) -> Result<Decimal> {
        let due: DueAmount = self
            .backend
            .get_json(&format!("/due-purchase-payments/{id}"))
            .await?;
        Ok(due.0)
    }

    /// `PUT /update-due-purchase-payments/{id}`.
    pub async fn settle_purchase(&self, id: i64, settlement: &SettlementPayload) -> Result<String> {
        let response: MessageResponse = self
            .backend
            .put_json(&format!("/update-due-purchase-payments/{id}"), settlement)
            .await?;
        Ok(response.message)
    }
}
