//! Session state: the signed-in operator, the active section, and the
//! per-kind draft ledgers.
//!
//! The session is the application store: `LOGIN` inserts the operator,
//! `LOGOUT` clears everything, and each document form keeps its in-progress
//! ledger here between requests.

use ledger_core::{DocumentKind, DocumentLedger};
use tower_sessions::Session;

use crate::models::user::CurrentUser;

type SessionResult<T> = Result<T, tower_sessions::session::Error>;

pub const USER_KEY: &str = "user";
pub const SECTION_KEY: &str = "section";
pub const QUOTATION_EDIT_KEY: &str = "quotation_edit_id";

/// Section shown until the operator picks one.
pub const DEFAULT_SECTION: &str = "Accessories Section";

fn draft_key(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Purchase => "purchase_draft",
        DocumentKind::Quotation => "quotation_draft",
        DocumentKind::Invoice => "invoice_draft",
    }
}

pub async fn current_user(session: &Session) -> SessionResult<Option<CurrentUser>> {
    session.get(USER_KEY).await
}

/// The `LOGIN` transition.
pub async fn log_in(session: &Session, user: &CurrentUser) -> SessionResult<()> {
    session.insert(USER_KEY, user).await
}

/// The `LOGOUT` transition: back to the initial state, drafts included.
pub async fn log_out(session: &Session) {
    session.clear().await;
}

pub async fn selected_section(session: &Session) -> SessionResult<String> {
    Ok(session
        .get(SECTION_KEY)
        .await?
        .unwrap_or_else(|| DEFAULT_SECTION.to_string()))
}

pub async fn select_section(session: &Session, section: &str) -> SessionResult<()> {
    session.insert(SECTION_KEY, section).await
}

pub async fn draft(session: &Session, kind: DocumentKind) -> SessionResult<Option<DocumentLedger>> {
    session.get(draft_key(kind)).await
}

pub async fn store_draft(session: &Session, ledger: &DocumentLedger) -> SessionResult<()> {
    session.insert(draft_key(ledger.kind), ledger).await
}

pub async fn clear_draft(session: &Session, kind: DocumentKind) -> SessionResult<()> {
    session
        .remove::<DocumentLedger>(draft_key(kind))
        .await
        .map(|_| ())
}

/// Id of the persisted quotation the current draft was loaded from, if the
/// operator is editing rather than creating.
pub async fn editing_quotation(session: &Session) -> SessionResult<Option<i64>> {
    session.get(QUOTATION_EDIT_KEY).await
}

pub async fn set_editing_quotation(session: &Session, id: Option<i64>) -> SessionResult<()> {
    match id {
        Some(id) => session.insert(QUOTATION_EDIT_KEY, id).await,
        None => session.remove::<i64>(QUOTATION_EDIT_KEY).await.map(|_| ()),
    }
}
