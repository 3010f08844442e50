//! Due-payment reconciliation: fetch the authoritative due, preview the
//! remaining balance, submit a settlement.
//!
//! The due amount is asked of the backend both when the round opens and
//! again just before the settlement is written; the amount shown or typed
//! locally is never treated as authoritative.

use askama::Template;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use ledger_core::PaymentState;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

use crate::error::AppError;
use crate::models::payment::SettlementPayload;
use crate::services::payments_client::PaymentsClient;
use crate::AppState;

#[derive(Clone, Copy)]
enum DueKind {
    Invoice,
    Purchase,
}

impl DueKind {
    fn base_path(&self) -> &'static str {
        match self {
            DueKind::Invoice => "/invoices",
            DueKind::Purchase => "/purchases",
        }
    }
}

#[derive(Template)]
#[template(path = "due_payment.html")]
pub struct DuePaymentTemplate {
    pub base_path: &'static str,
    pub id: i64,
    pub due: Decimal,
    pub tendered: Decimal,
    pub remaining: Decimal,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "remaining.html")]
pub struct RemainingTemplate {
    pub remaining: Decimal,
}

#[derive(Deserialize)]
pub struct TenderForm {
    #[serde(default)]
    pub due: String,
    #[serde(default)]
    pub tendered: String,
}

async fn fetch_due(payments: &PaymentsClient, kind: DueKind, id: i64) -> Result<Decimal, AppError> {
    let due = match kind {
        DueKind::Invoice => payments.invoice_due(id).await?,
        DueKind::Purchase => payments.purchase_due(id).await?,
    };
    Ok(due)
}

fn parse_amount(raw: &str) -> Decimal {
    Decimal::from_str(raw.trim()).unwrap_or(Decimal::ZERO)
}

async fn due_page(
    payments: &PaymentsClient,
    kind: DueKind,
    id: i64,
) -> Result<DuePaymentTemplate, AppError> {
    let due = fetch_due(payments, kind, id).await?;
    let payment = PaymentState::open(due);
    Ok(DuePaymentTemplate {
        base_path: kind.base_path(),
        id,
        due,
        tendered: payment.tendered,
        remaining: payment.remaining(),
        error: None,
    })
}

async fn settle(
    payments: &PaymentsClient,
    kind: DueKind,
    id: i64,
    form: TenderForm,
) -> Result<Response, AppError> {
    let due = fetch_due(payments, kind, id).await?;

    let Ok(tendered) = Decimal::from_str(form.tendered.trim()) else {
        return Ok(DuePaymentTemplate {
            base_path: kind.base_path(),
            id,
            due,
            tendered: Decimal::ZERO,
            remaining: due,
            error: Some("Paid amount must be a number!".to_string()),
        }
        .into_response());
    };

    let payment = PaymentState::open(due).with_tendered(tendered);
    let settlement = SettlementPayload::from(payment.settlement());

    let result = match kind {
        DueKind::Invoice => payments.settle_invoice(id, &settlement).await,
        DueKind::Purchase => payments.settle_purchase(id, &settlement).await,
    };

    match result {
        Ok(_) => Ok(Redirect::to(kind.base_path()).into_response()),
        Err(err) => Ok(DuePaymentTemplate {
            base_path: kind.base_path(),
            id,
            due,
            tendered,
            remaining: payment.remaining(),
            error: Some(err.to_string()),
        }
        .into_response()),
    }
}

pub async fn invoice_due_page(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<DuePaymentTemplate, AppError> {
    due_page(&state.payments, DueKind::Invoice, id).await
}

pub async fn purchase_due_page(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<DuePaymentTemplate, AppError> {
    due_page(&state.payments, DueKind::Purchase, id).await
}

/// Fragment re-rendered on every change to the tendered amount.
pub async fn remaining_fragment(Form(form): Form<TenderForm>) -> RemainingTemplate {
    let payment = PaymentState::open(parse_amount(&form.due)).with_tendered(parse_amount(&form.tendered));
    RemainingTemplate {
        remaining: payment.remaining(),
    }
}

pub async fn settle_invoice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<TenderForm>,
) -> Result<Response, AppError> {
    settle(&state.payments, DueKind::Invoice, id, form).await
}

pub async fn settle_purchase(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<TenderForm>,
) -> Result<Response, AppError> {
    settle(&state.payments, DueKind::Purchase, id, form).await
}
