//! Shared line-item form flow for purchases, quotations and invoices.
//!
//! Each form keeps its in-progress ledger in the session. Every POST carries
//! the full header plus the item staging buffer, so header edits survive item
//! operations; the active section is the fixed category of the draft and is
//! never taken from the form.

use askama::Template;
use chrono::{Local, NaiveDate};
use ledger_core::{DocumentKind, DocumentLedger, DocumentNumbers, ItemInput};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use tower_sessions::Session;

use crate::error::AppError;
use crate::session;

/// Static wiring of one document family's form.
pub struct FormConfig {
    pub kind: DocumentKind,
    pub title: &'static str,
    pub party_label: &'static str,
    pub base_path: &'static str,
    pub show_paid: bool,
}

pub const PURCHASE_FORM: FormConfig = FormConfig {
    kind: DocumentKind::Purchase,
    title: "Add Purchase",
    party_label: "Supplier Name",
    base_path: "/purchases",
    show_paid: true,
};

pub const QUOTATION_FORM: FormConfig = FormConfig {
    kind: DocumentKind::Quotation,
    title: "Add Quotation",
    party_label: "Customer Name",
    base_path: "/quotations",
    show_paid: false,
};

pub const INVOICE_FORM: FormConfig = FormConfig {
    kind: DocumentKind::Invoice,
    title: "New Invoice",
    party_label: "Customer Name",
    base_path: "/invoices",
    show_paid: true,
};

/// Fields posted by the document form.
#[derive(Debug, Deserialize)]
pub struct LedgerForm {
    #[serde(default)]
    pub party_name: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub document_number: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub paid: String,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub item_description: String,
    #[serde(default)]
    pub item_quantity: String,
    #[serde(default)]
    pub item_unit_price: String,
    #[serde(default)]
    pub edit_index: Option<usize>,
}

impl LedgerForm {
    pub fn staged_item(&self) -> ItemInput {
        ItemInput {
            name: self.item_name.clone(),
            description: self.item_description.clone(),
            quantity: self.item_quantity.clone(),
            unit_price: self.item_unit_price.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "document_form.html")]
pub struct DocumentFormTemplate {
    pub title: &'static str,
    pub party_label: &'static str,
    pub base_path: &'static str,
    pub show_paid: bool,
    pub draft: DocumentLedger,
    pub staged: ItemInput,
    pub edit_index: Option<usize>,
    pub error: Option<String>,
    pub notice: Option<String>,
}

pub fn form_template(
    cfg: &FormConfig,
    draft: DocumentLedger,
    staged: ItemInput,
    edit_index: Option<usize>,
    error: Option<String>,
    notice: Option<String>,
) -> DocumentFormTemplate {
    DocumentFormTemplate {
        title: cfg.title,
        party_label: cfg.party_label,
        base_path: cfg.base_path,
        show_paid: cfg.show_paid,
        draft,
        staged,
        edit_index,
        error,
        notice,
    }
}

/// A fresh, empty ledger with a generated number, today's date and the
/// active section as its category.
pub fn fresh_draft(kind: DocumentKind, numbers: &DocumentNumbers, section: &str) -> DocumentLedger {
    DocumentLedger::new(
        kind,
        numbers.next(kind),
        Local::now().date_naive(),
        section.to_string(),
    )
}

/// Resume the in-progress draft, or start a fresh one.
pub async fn load_or_create_draft(
    session: &Session,
    cfg: &FormConfig,
    numbers: &DocumentNumbers,
) -> Result<DocumentLedger, AppError> {
    if let Some(draft) = session::draft(session, cfg.kind).await? {
        return Ok(draft);
    }
    let section = session::selected_section(session).await?;
    let draft = fresh_draft(cfg.kind, numbers, &section);
    session::store_draft(session, &draft).await?;
    Ok(draft)
}

/// Overwrite the draft's header fields from the posted form.
pub fn apply_header(draft: &mut DocumentLedger, form: &LedgerForm) {
    draft.party_name = form.party_name.trim().to_string();
    draft.contact_number = form.contact_number.trim().to_string();
    draft.document_number = form.document_number.trim().to_string();
    if let Ok(date) = NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d") {
        draft.date = date;
    }
    if form.paid.trim().is_empty() {
        draft.paid = Decimal::ZERO;
    } else if let Ok(paid) = Decimal::from_str(form.paid.trim()) {
        draft.paid = paid.max(Decimal::ZERO);
    }
}

/// Show the form with the current draft.
pub async fn show_form(
    session: &Session,
    cfg: &FormConfig,
    numbers: &DocumentNumbers,
) -> Result<DocumentFormTemplate, AppError> {
    let draft = load_or_create_draft(session, cfg, numbers).await?;
    Ok(form_template(cfg, draft, ItemInput::default(), None, None, None))
}

/// Validate the staged item and append it, or replace the entry being
/// edited. On success the staging buffer is cleared; on rejection the buffer
/// keeps the operator's input and the item sequence is untouched.
pub async fn handle_save_item(
    session: &Session,
    cfg: &FormConfig,
    numbers: &DocumentNumbers,
    form: LedgerForm,
) -> Result<DocumentFormTemplate, AppError> {
    let mut draft = load_or_create_draft(session, cfg, numbers).await?;
    apply_header(&mut draft, &form);

    let staged = form.staged_item();
    let outcome = staged
        .validate()
        .and_then(|item| draft.add_or_update(item, form.edit_index));

    session::store_draft(session, &draft).await?;

    match outcome {
        Ok(()) => Ok(form_template(cfg, draft, ItemInput::default(), None, None, None)),
        Err(err) => Ok(form_template(
            cfg,
            draft,
            staged,
            form.edit_index,
            Some(err.to_string()),
            None,
        )),
    }
}

/// Load the item at `index` back into the staging buffer for editing.
pub async fn handle_edit_item(
    session: &Session,
    cfg: &FormConfig,
    numbers: &DocumentNumbers,
    index: usize,
    form: LedgerForm,
) -> Result<DocumentFormTemplate, AppError> {
    let mut draft = load_or_create_draft(session, cfg, numbers).await?;
    apply_header(&mut draft, &form);
    session::store_draft(session, &draft).await?;

    match draft.item_input(index) {
        Ok(staged) => Ok(form_template(cfg, draft, staged, Some(index), None, None)),
        Err(err) => Ok(form_template(
            cfg,
            draft,
            form.staged_item(),
            None,
            Some(err.to_string()),
            None,
        )),
    }
}

/// Delete the item at `index`.
pub async fn handle_delete_item(
    session: &Session,
    cfg: &FormConfig,
    numbers: &DocumentNumbers,
    index: usize,
    form: LedgerForm,
) -> Result<DocumentFormTemplate, AppError> {
    let mut draft = load_or_create_draft(session, cfg, numbers).await?;
    apply_header(&mut draft, &form);

    let outcome = draft.remove(index);
    session::store_draft(session, &draft).await?;

    let error = outcome.err().map(|err| err.to_string());
    Ok(form_template(cfg, draft, form.staged_item(), None, error, None))
}

/// Throw the draft away and start over.
pub async fn handle_discard(
    session: &Session,
    cfg: &FormConfig,
    numbers: &DocumentNumbers,
) -> Result<DocumentFormTemplate, AppError> {
    session::clear_draft(session, cfg.kind).await?;
    show_form(session, cfg, numbers).await
}
