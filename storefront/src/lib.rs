pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod services;
pub mod session;
pub mod startup;

use std::sync::Arc;

use ledger_core::DocumentNumbers;
use services::{
    auth_client::AuthClient, catalog_client::CatalogClient, documents_client::DocumentsClient,
    payments_client::PaymentsClient,
};

/// Shared application state containing the backend clients and the
/// document-number generator.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthClient,
    pub catalog: CatalogClient,
    pub documents: DocumentsClient,
    pub payments: PaymentsClient,
    pub numbers: Arc<DocumentNumbers>,
}

impl AppState {
    pub fn new(backend: services::backend::Backend) -> Self {
        Self {
            auth: AuthClient::new(backend.clone()),
            catalog: CatalogClient::new(backend.clone()),
            documents: DocumentsClient::new(backend.clone()),
            payments: PaymentsClient::new(backend),
            numbers: Arc::new(DocumentNumbers::new()),
        }
    }
}
