//! Login, registration and logout.

use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::user::{LoginCredentials, Registration};
use crate::session;
use crate::AppState;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub error: Option<String>,
    pub notice: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Deserialize)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(default)]
    pub location: String,
}

pub async fn login_page() -> LoginTemplate {
    LoginTemplate { error: None }
}

pub async fn register_page() -> RegisterTemplate {
    RegisterTemplate {
        error: None,
        notice: None,
    }
}

/// `POST /login` on the backend; on success the operator lands in the
/// session and is sent to the dashboard.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let credentials = LoginCredentials {
        email: form.email,
        password: form.password,
        location: form.location,
    };

    match state.auth.login(&credentials).await {
        Ok(user) => {
            session::log_in(&session, &user).await?;
            Ok(Redirect::to("/").into_response())
        }
        Err(err) => Ok(LoginTemplate {
            error: Some(err.to_string()),
        }
        .into_response()),
    }
}

pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    if form.password != form.confirm_password {
        return Ok(RegisterTemplate {
            error: Some("Passwords do not match".to_string()),
            notice: None,
        }
        .into_response());
    }

    let registration = Registration {
        full_name: form.full_name,
        email: form.email,
        password: form.password,
        confirm_password: form.confirm_password,
        location: form.location,
    };

    match state.auth.register(&registration).await {
        Ok(message) => {
            let notice = if message.is_empty() {
                "Registration successful!".to_string()
            } else {
                message
            };
            Ok(RegisterTemplate {
                error: None,
                notice: Some(notice),
            }
            .into_response())
        }
        Err(err) => Ok(RegisterTemplate {
            error: Some(err.to_string()),
            notice: None,
        }
        .into_response()),
    }
}

/// The session is cleared only after the backend confirms the logout; on
/// failure the operator stays signed in and can retry.
pub async fn logout(State(state): State<AppState>, session: Session) -> Result<Response, AppError> {
    match state.auth.logout().await {
        Ok(()) => {
            session::log_out(&session).await;
            Ok(Redirect::to("/login").into_response())
        }
        Err(err) => {
            tracing::error!("Logout failed: {}", err);
            Ok(Html(
                "<p class=\"text-danger\">Logout failed</p><a href=\"/\">Back</a>".to_string(),
            )
            .into_response())
        }
    }
}
