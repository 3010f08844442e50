use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::session;

/// The operator identity returned by `/login` and kept in the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub username: String,
    pub location: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await.map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to extract session",
            )
                .into_response()
        })?;

        match session::current_user(&session).await.unwrap_or(None) {
            Some(user) => Ok(user),
            None => Err(Redirect::to("/login").into_response()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
    pub location: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    pub user: CurrentUser,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub location: String,
}
