//! Purchase form and list.

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use ledger_core::{search, ItemInput};
use serde::Deserialize;
use tower_sessions::Session;

use super::documents::{self, LedgerForm, PURCHASE_FORM};
use crate::error::AppError;
use crate::models::purchase::{PurchasePayload, PurchaseRecord};
use crate::models::user::CurrentUser;
use crate::session;
use crate::AppState;

pub async fn new_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    documents::show_form(&session, &PURCHASE_FORM, &state.numbers).await
}

pub async fn save_item(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LedgerForm>,
) -> Result<impl IntoResponse, AppError> {
    documents::handle_save_item(&session, &PURCHASE_FORM, &state.numbers, form).await
}

pub async fn edit_item(
    State(state): State<AppState>,
    session: Session,
    Path(index): Path<usize>,
    Form(form): Form<LedgerForm>,
) -> Result<impl IntoResponse, AppError> {
    documents::handle_edit_item(&session, &PURCHASE_FORM, &state.numbers, index, form).await
}

pub async fn delete_item(
    State(state): State<AppState>,
    session: Session,
    Path(index): Path<usize>,
    Form(form): Form<LedgerForm>,
) -> Result<impl IntoResponse, AppError> {
    documents::handle_delete_item(&session, &PURCHASE_FORM, &state.numbers, index, form).await
}

pub async fn discard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    documents::handle_discard(&session, &PURCHASE_FORM, &state.numbers).await
}

/// Validate the completed ledger locally, then `POST /add-purchase`.
///
/// Validation failures never reach the network; the draft resets only after
/// the backend confirms.
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    user: CurrentUser,
    Form(form): Form<LedgerForm>,
) -> Result<Response, AppError> {
    let cfg = &PURCHASE_FORM;
    let mut draft = documents::load_or_create_draft(&session, cfg, &state.numbers).await?;
    documents::apply_header(&mut draft, &form);
    session::store_draft(&session, &draft).await?;

    if let Err(err) = draft.validate_for_submit() {
        return Ok(documents::form_template(
            cfg,
            draft,
            form.staged_item(),
            form.edit_index,
            Some(err.to_string()),
            None,
        )
        .into_response());
    }

    let payload = PurchasePayload::from_ledger(&draft, &user);
    match state.documents.create_purchase(&payload).await {
        Ok(message) => {
            session::clear_draft(&session, cfg.kind).await?;
            let fresh = documents::load_or_create_draft(&session, cfg, &state.numbers).await?;
            let notice = if message.is_empty() {
                "Purchase saved successfully".to_string()
            } else {
                message
            };
            Ok(
                documents::form_template(cfg, fresh, ItemInput::default(), None, None, Some(notice))
                    .into_response(),
            )
        }
        Err(err) => Ok(documents::form_template(
            cfg,
            draft,
            form.staged_item(),
            form.edit_index,
            Some(err.to_string()),
            None,
        )
        .into_response()),
    }
}

#[derive(Template)]
#[template(path = "purchase_list.html")]
pub struct PurchaseListTemplate {
    pub query: String,
    pub rows: Vec<PurchaseRecord>,
    pub error: Option<String>,
}

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub q: String,
}

pub async fn list_page(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(params): Query<ListParams>,
) -> Result<PurchaseListTemplate, AppError> {
    let (rows, error) = match state.documents.purchase_list().await {
        Ok(rows) => (rows, None),
        Err(err) => {
            tracing::error!("Failed to fetch purchase list: {}", err);
            (Vec::new(), Some(err.to_string()))
        }
    };
    let rows = rows
        .into_iter()
        .filter(|row| search::matches(&params.q, &row.haystack()))
        .collect();

    Ok(PurchaseListTemplate {
        query: params.q,
        rows,
        error,
    })
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    state.documents.delete_purchase(id).await?;
    Ok(Redirect::to("/purchases"))
}
