//! Login, registration and logout.
//!
//! Form submissions that fail for a reason the user can fix (bad input,
//! taken username, wrong password) re-render the login page with the message
//! instead of returning an error status.

use axum::{
    Form,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::SignedCookieJar;
use tracing::{info, warn};

use atelier_core::{AtelierError, domain::Credentials};

use crate::infra::{app_state::AppState, errors::AppResult};
use crate::session::{end_session, start_session};
use crate::views;

pub async fn index() -> Html<String> {
    views::login_page(None)
}

pub async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(credentials): Form<Credentials>,
) -> AppResult<Response> {
    match state
        .identity
        .authenticate(&credentials.username, &credentials.password)
        .await
    {
        Ok(user) => {
            info!(username = %user.username, "user logged in");
            let jar = start_session(jar, &user.username, state.config.auth.secure_cookies);
            Ok((jar, Redirect::to("/dashboard")).into_response())
        }
        Err(err) => form_error(err),
    }
}

pub async fn register(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(credentials): Form<Credentials>,
) -> AppResult<Response> {
    match state
        .identity
        .register(&credentials.username, &credentials.password)
        .await
    {
        Ok(user) => {
            info!(username = %user.username, user_id = %user.id, "user registered");
            let jar = start_session(jar, &user.username, state.config.auth.secure_cookies);
            Ok((jar, Redirect::to("/dashboard")).into_response())
        }
        Err(err) => form_error(err),
    }
}

pub async fn logout(jar: SignedCookieJar) -> impl IntoResponse {
    (end_session(jar), Redirect::to("/"))
}

fn form_error(err: AtelierError) -> AppResult<Response> {
    if err.is_user_facing() {
        warn!(error = %err, "rejected credentials form");
        Ok(views::login_page(Some(&err.to_string())).into_response())
    } else {
        Err(err.into())
    }
}
