use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::SignedCookieJar;
use tracing::warn;

use crate::infra::{app_state::AppState, errors::AppError};
use crate::session::{SessionUser, session_username};

/// Anonymous callers are sent to the landing page; authenticated ones get a
/// [`SessionUser`] extension.
pub async fn require_session(jar: SignedCookieJar, mut request: Request, next: Next) -> Response {
    let Some(username) = session_username(&jar) else {
        return Redirect::to("/").into_response();
    };

    request.extensions_mut().insert(SessionUser { username });
    next.run(request).await
}

/// Gate for the ownership administration endpoints: the session user must be
/// on the configured admin allowlist.
pub async fn require_admin(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let username = session_username(&jar)
        .ok_or_else(|| AppError::unauthorized("Authentication required"))?;

    if !state.config.auth.is_admin(&username) {
        warn!(%username, path = %request.uri().path(), "non-admin called admin endpoint");
        return Err(AppError::forbidden("Admin access required"));
    }

    request.extensions_mut().insert(SessionUser { username });
    Ok(next.run(request).await)
}
