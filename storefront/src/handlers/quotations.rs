//! Quotation form, edit flow and list.

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use chrono::NaiveDate;
use ledger_core::{search, DocumentLedger, ItemInput, LineItem};
use serde::Deserialize;
use tower_sessions::Session;

use super::documents::{self, LedgerForm, QUOTATION_FORM};
use crate::error::AppError;
use crate::models::quotation::{QuotationPayload, QuotationRecord};
use crate::models::user::CurrentUser;
use crate::session;
use crate::AppState;

pub async fn new_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    documents::show_form(&session, &QUOTATION_FORM, &state.numbers).await
}

pub async fn save_item(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LedgerForm>,
) -> Result<impl IntoResponse, AppError> {
    documents::handle_save_item(&session, &QUOTATION_FORM, &state.numbers, form).await
}

pub async fn edit_item(
    State(state): State<AppState>,
    session: Session,
    Path(index): Path<usize>,
    Form(form): Form<LedgerForm>,
) -> Result<impl IntoResponse, AppError> {
    documents::handle_edit_item(&session, &QUOTATION_FORM, &state.numbers, index, form).await
}

pub async fn delete_item(
    State(state): State<AppState>,
    session: Session,
    Path(index): Path<usize>,
    Form(form): Form<LedgerForm>,
) -> Result<impl IntoResponse, AppError> {
    documents::handle_delete_item(&session, &QUOTATION_FORM, &state.numbers, index, form).await
}

pub async fn discard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    session::set_editing_quotation(&session, None).await?;
    documents::handle_discard(&session, &QUOTATION_FORM, &state.numbers).await
}

/// Load a persisted quotation into the draft for editing.
pub async fn edit_page(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let details = state.documents.quotation_details(id).await?;
    let section = session::selected_section(&session).await?;

    let date = NaiveDate::parse_from_str(details.date.trim(), "%Y-%m-%d")
        .unwrap_or_else(|_| chrono::Local::now().date_naive());
    let mut draft = DocumentLedger::new(
        ledger_core::DocumentKind::Quotation,
        details.quotation_number.clone(),
        date,
        section,
    );
    draft.party_name = details.customer_name.clone();
    draft.contact_number = details.mobile_number.clone();
    for item in &details.products {
        // append never fails
        let _ = draft.add_or_update(LineItem::from(item), None);
    }

    session::store_draft(&session, &draft).await?;
    session::set_editing_quotation(&session, Some(id)).await?;
    Ok(Redirect::to("/quotations/new").into_response())
}

/// Validate the completed ledger locally, then `POST /add-quotation` or, when
/// editing a persisted record, `PUT /update-quotation/{id}`.
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    user: CurrentUser,
    Form(form): Form<LedgerForm>,
) -> Result<Response, AppError> {
    let cfg = &QUOTATION_FORM;
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

    let payload = QuotationPayload::from_ledger(&draft, &user);
    let editing = session::editing_quotation(&session).await?;
    let result = match editing {
        Some(id) => state.documents.update_quotation(id, &payload).await,
        None => state.documents.create_quotation(&payload).await,
    };

    match result {
        Ok(message) => {
            session::clear_draft(&session, cfg.kind).await?;
            session::set_editing_quotation(&session, None).await?;
            if editing.is_some() {
                return Ok(Redirect::to("/quotations").into_response());
            }
            let fresh = documents::load_or_create_draft(&session, cfg, &state.numbers).await?;
            let notice = if message.is_empty() {
                "Quotation saved successfully".to_string()
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
#[template(path = "quotation_list.html")]
pub struct QuotationListTemplate {
    pub query: String,
    pub rows: Vec<QuotationRecord>,
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
) -> Result<QuotationListTemplate, AppError> {
    let section = session::selected_section(&session).await?;
    let (rows, error) = match state.documents.quotation_list(&user.location, &section).await {
        Ok(rows) => (rows, None),
        Err(err) => {
            tracing::error!("Failed to fetch quotation list: {}", err);
            (Vec::new(), Some(err.to_string()))
        }
    };
    let rows = rows
        .into_iter()
        .filter(|row| search::matches(&params.q, &row.haystack()))
        .collect();

    Ok(QuotationListTemplate {
        query: params.q,
        rows,
        error,
    })
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    state.documents.delete_quotation(id).await?;
    Ok(Redirect::to("/quotations"))
}
