//! Section selection; the active section scopes inventory and quotation
//! listings and is the fixed category of new drafts.

use askama::Template;
use axum::{
    extract::State,
    response::Redirect,
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::AppError;
use crate::session;
use crate::AppState;

#[derive(Template)]
#[template(path = "sections.html")]
pub struct SectionsTemplate {
    pub sections: Vec<String>,
    pub selected: String,
    pub error: Option<String>,
}

fn default_sections() -> Vec<String> {
    vec![
        "Accessories Section".to_string(),
        "CCTV Section".to_string(),
    ]
}

pub async fn picker(
    State(state): State<AppState>,
    session: Session,
) -> Result<SectionsTemplate, AppError> {
    let selected = session::selected_section(&session).await?;
    let (sections, error) = match state.catalog.sections().await {
        Ok(sections) if !sections.is_empty() => (sections, None),
        Ok(_) => (default_sections(), None),
        Err(err) => {
            tracing::error!("Failed to fetch sections: {}", err);
            (default_sections(), Some(err.to_string()))
        }
    };

    Ok(SectionsTemplate {
        sections,
        selected,
        error,
    })
}

#[derive(Deserialize)]
pub struct SectionForm {
    pub section: String,
}

pub async fn select(session: Session, Form(form): Form<SectionForm>) -> Result<Redirect, AppError> {
    session::select_section(&session, form.section.trim()).await?;
    Ok(Redirect::to("/products"))
}
