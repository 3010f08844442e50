//! Inventory and section calls against the backend.

use anyhow::Result;

use super::backend::{Backend, MessageResponse};
use crate::models::product::{InventoryResponse, Product, ProductPayload, StockUpdate};
use crate::models::section::SectionsResponse;

#[derive(Clone)]
pub struct CatalogClient {
    backend: Backend,
}

impl CatalogClient {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// `GET /list/{location}/{category}`.
    pub async fn list(&self, location: &str, category: &str) -> Result<Vec<Product>> {
        let response: InventoryResponse = self
            .backend
            .get_json(&format!("/list/{location}/{category}"))
            .await?;
        Ok(response.inventory)
    }

    /// `POST /add`.
    pub async fn add_product(&self, product: &ProductPayload) -> Result<String> {
        let response: MessageResponse = self.backend.post_json("/add", product).await?;
        Ok(response.message)
    }

    /// `PUT /update/{id}`.
    pub async fn update_product(&self, id: i64, product: &ProductPayload) -> Result<String> {
        let response: MessageResponse = self
            .backend
            .put_json(&format!("/update/{id}"), product)
            .await?;
        Ok(response.message)
    }

    /// `DELETE /delete/{id}`.
    pub async fn delete_product(&self, id: i64) -> Result<String> {
        let response: MessageResponse = self.backend.delete_json(&format!("/delete/{id}")).await?;
        Ok(response.message)
    }

    /// `PUT /update-stock`.
    pub async fn update_stock(&self, update: &StockUpdate) -> Result<String> {
        let response: MessageResponse = self.backend.put_json("/update-stock", update).await?;
        Ok(response.message)
    }

    /// `GET /get-sections`.
    pub async fn sections(&self) -> Result<Vec<String>> {
        let response: SectionsResponse = self.backend.get_json("/get-sections").await?;
        Ok(response.sections)
    }
}
