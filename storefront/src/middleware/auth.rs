use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::session;

pub async fn require_login(
    session: Session,
    request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let user = session::current_user(&session).await.unwrap_or(None);

    if user.is_none() {
        return Ok(Redirect::to("/login").into_response());
    }

    Ok(next.run(request).await)
}
