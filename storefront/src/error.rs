use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Application-level failures surfaced to the operator.
#[derive(Debug, Error)]
pub enum AppError {
    /// Local validation failure, blocked before any backend call.
    #[error("{0}")]
    Validation(String),

    /// A backend call was rejected or failed; the message is shown verbatim.
    #[error("{0}")]
    Backend(#[from] anyhow::Error),

    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(format!("<p class=\"text-danger\">{message}</p>")),
            )
                .into_response(),
            AppError::Backend(err) => (
                StatusCode::BAD_GATEWAY,
                Html(format!("<p class=\"text-danger\">{err}</p>")),
            )
                .into_response(),
            AppError::Session(err) => {
                tracing::error!("Session failure: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html("<p class=\"text-danger\">Something went wrong. Please retry.</p>".to_string()),
                )
                    .into_response()
            }
        }
    }
}
