//! Purchase, quotation and invoice calls against the backend.

use anyhow::Result;

use super::backend::{Backend, MessageResponse};
use crate::models::invoice::{InvoiceDetails, InvoiceListResponse, InvoicePayload, InvoiceRecord};
use crate::models::purchase::{PurchaseListResponse, PurchasePayload, PurchaseRecord};
use crate::models::quotation::{
    QuotationDetails, QuotationListResponse, QuotationPayload, QuotationRecord,
};

#[derive(Clone)]
pub struct DocumentsClient {
    backend: Backend,
}

impl DocumentsClient {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    // Purchases

    /// `POST /add-purchase`.
    pub async fn create_purchase(&self, payload: &PurchasePayload) -> Result<String> {
        let response: MessageResponse = self.backend.post_json("/add-purchase", payload).await?;
        Ok(response.message)
    }

    /// `GET /purchase-list`.
    pub async fn purchase_list(&self) -> Result<Vec<PurchaseRecord>> {
        let response: PurchaseListResponse = self.backend.get_json("/purchase-list").await?;
        Ok(response.purchase)
    }

    /// `DELETE /delete-purchase/{id}`.
    pub async fn delete_purchase(&self, id: i64) -> Result<String> {
        let response: MessageResponse = self
            .backend
            .delete_json(&format!("/delete-purchase/{id}"))
            .await?;
        Ok(response.message)
    }

    // Quotations

    /// `POST /add-quotation`.
    pub async fn create_quotation(&self, payload: &QuotationPayload) -> Result<String> {
        let response: MessageResponse = self.backend.post_json("/add-quotation", payload).await?;
        Ok(response.message)
    }

    /// `PUT /update-quotation/{id}`.
    pub async fn update_quotation(&self, id: i64, payload: &QuotationPayload) -> Result<String> {
        let response: MessageResponse = self
            .backend
            .put_json(&format!("/update-quotation/{id}"), payload)
            .await?;
        Ok(response.message)
    }

    /// `GET /quotation-list/{location}/{category}`.
    pub async fn quotation_list(&self, location: &str, category: &str) -> Result<Vec<QuotationRecord>> {
        let response: QuotationListResponse = self
            .backend
            .get_json(&format!("/quotation-list/{location}/{category}"))
            .await?;
        Ok(response.quotations)
    }

    /// `GET /quotation-details/{id}`.
    pub async fn quotation_details(&self, id: i64) -> Result<QuotationDetails> {
        self.backend
            .get_json(&format!("/quotation-details/{id}"))
            .await
    }

    /// `DELETE /delete-quotation/{id}`.
    pub async fn delete_quotation(&self, id: i64) -> Result<String> {
        let response: MessageResponse = self
            .backend
            .delete_json(&format!("/delete-quotation/{id}"))
            .await?;
        Ok(response.message)
    }

    // Invoices

    /// `POST /save-invoice`.
    pub async fn save_invoice(&self, payload: &InvoicePayload) -> Result<String> {
        let response: MessageResponse = self.backend.post_json("/save-invoice", payload).await?;
        Ok(response.message)
    }

    /// `GET /invoice-list`.
    pub async fn invoice_list(&self) -> Result<Vec<InvoiceRecord>> {
        let response: InvoiceListResponse = self.backend.get_json("/invoice-list").await?;
        Ok(response.invoices)
    }

    /// `GET /invoice-details/{id}`.
    pub async fn invoice_details(&self, id: i64) -> Result<InvoiceDetails> {
        self.backend
            .get_json(&format!("/invoice-details/{id}"))
            .await
    }

    /// `DELETE /delete-invoice/{id}`.
    pub async fn delete_invoice(&self, id: i64) -> Result<String> {
        let response: MessageResponse = self
            .backend
            .delete_json(&format!("/delete-invoice/{id}"))
            .await?;
        Ok(response.message)
    }
}
