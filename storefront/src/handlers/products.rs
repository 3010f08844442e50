//! Inventory list and product form.

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use ledger_core::{search, LedgerError};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::product::{Product, ProductPayload, StockUpdate};
use crate::models::user::CurrentUser;
use crate::session;
use crate::AppState;

#[derive(Template)]
#[template(path = "product_list.html")]
pub struct ProductListTemplate {
    pub section: String,
    pub query: String,
    pub products: Vec<Product>,
    pub error: Option<String>,
}

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub q: String,
}

pub async fn list_page(
    State(state): State<AppState>,
    user: CurrentUser,
    session: Session,
    Query(params): Query<ListParams>,
) -> Result<ProductListTemplate, AppError> {
    let section = session::selected_section(&session).await?;
    let (products, error) = match state.catalog.list(&user.location, &section).await {
        Ok(products) => (products, None),
        Err(err) => {
            tracing::error!("Failed to fetch inventory: {}", err);
            (Vec::new(), Some(err.to_string()))
        }
    };
    let products = products
        .into_iter()
        .filter(|product| search::matches(&params.q, &product.haystack()))
        .collect();

    Ok(ProductListTemplate {
        section,
        query: params.q,
        products,
        error,
    })
}

#[derive(Template)]
#[template(path = "product_form.html")]
pub struct ProductFormTemplate {
    pub title: &'static str,
    pub action: String,
    pub location: String,
    pub section: String,
    pub form: ProductFormData,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFormData {
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub price: String,
}

fn build_payload(
    form: &ProductFormData,
    section: &str,
    user: &CurrentUser,
) -> Result<ProductPayload, String> {
    let name = form.product_name.trim();
    if name.is_empty() {
        return Err(LedgerError::EmptyName.to_string());
    }
    let quantity: i64 = form
        .quantity
        .trim()
        .parse()
        .ok()
        .filter(|quantity| *quantity >= 0)
        .ok_or_else(|| "Quantity must be a whole number!".to_string())?;
    let price = Decimal::from_str(form.price.trim())
        .ok()
        .filter(|price| *price > Decimal::ZERO)
        .ok_or_else(|| LedgerError::InvalidPrice.to_string())?;

    let status = if form.status.trim().is_empty() {
        "Not Ready".to_string()
    } else {
        form.status.trim().to_string()
    };

    Ok(ProductPayload {
        product_name: name.to_string(),
        description: form.description.trim().to_string(),
        quantity,
        status,
        price,
        categories: section.to_string(),
        location: user.location.clone(),
    })
}

pub async fn new_page(
    user: CurrentUser,
    session: Session,
) -> Result<ProductFormTemplate, AppError> {
    let section = session::selected_section(&session).await?;
    Ok(ProductFormTemplate {
        title: "Add Product",
        action: "/products".to_string(),
        location: user.location,
        section,
        form: ProductFormData::default(),
        error: None,
    })
}

pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    session: Session,
    Form(form): Form<ProductFormData>,
) -> Result<Response, AppError> {
    let section = session::selected_section(&session).await?;
    let payload = match build_payload(&form, &section, &user) {
        Ok(payload) => payload,
        Err(message) => {
            return Ok(ProductFormTemplate {
                title: "Add Product",
                action: "/products".to_string(),
                location: user.location,
                section,
                form,
                error: Some(message),
            }
            .into_response())
        }
    };

    match state.catalog.add_product(&payload).await {
        Ok(_) => Ok(Redirect::to("/products").into_response()),
        Err(err) => Ok(ProductFormTemplate {
            title: "Add Product",
            action: "/products".to_string(),
            location: user.location,
            section,
            form,
            error: Some(err.to_string()),
        }
        .into_response()),
    }
}

pub async fn edit_page(
    State(state): State<AppState>,
    user: CurrentUser,
    session: Session,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let section = session::selected_section(&session).await?;
    let products = state.catalog.list(&user.location, &section).await?;
    let Some(product) = products.into_iter().find(|product| product.id == id) else {
        return Ok(Redirect::to("/products").into_response());
    };

    let form = ProductFormData {
        product_name: product.product_name,
        description: product.description,
        quantity: product.quantity.to_string(),
        status: product.status,
        price: product.price.to_string(),
    };
    Ok(ProductFormTemplate {
        title: "Edit Product",
        action: format!("/products/{id}"),
        location: user.location,
        section,
        form,
        error: None,
    }
    .into_response())
}

pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    session: Session,
    Path(id): Path<i64>,
    Form(form): Form<ProductFormData>,
) -> Result<Response, AppError> {
    let section = session::selected_section(&session).await?;
    let payload = match build_payload(&form, &section, &user) {
        Ok(payload) => payload,
        Err(message) => {
            return Ok(ProductFormTemplate {
                title: "Edit Product",
                action: format!("/products/{id}"),
                location: user.location,
                section,
                form,
                error: Some(message),
            }
            .into_response())
        }
    };

    match state.catalog.update_product(id, &payload).await {
        Ok(_) => Ok(Redirect::to("/products").into_response()),
        Err(err) => Ok(ProductFormTemplate {
            title: "Edit Product",
            action: format!("/products/{id}"),
            location: user.location,
            section,
            form,
            error: Some(err.to_string()),
        }
        .into_response()),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    state.catalog.delete_product(id).await?;
    Ok(Redirect::to("/products"))
}

#[derive(Deserialize)]
pub struct StockForm {
    pub quantity: String,
}

/// Stock correction from the list view, `PUT /update-stock` on the backend.
pub async fn adjust_stock(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<StockForm>,
) -> Result<Response, AppError> {
    let quantity: i64 = form
        .quantity
        .trim()
        .parse()
        .ok()
        .filter(|quantity| *quantity >= 0)
        .ok_or_else(|| AppError::Validation("Quantity must be a whole number!".to_string()))?;

    state
        .catalog
        .update_stock(&StockUpdate { id, quantity })
        .await?;
    Ok(Redirect::to("/products").into_response())
}
