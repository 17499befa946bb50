use axum::{
    extract::{Extension, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::SignedCookieJar;
use rand::seq::IndexedRandom;
use tracing::{info, warn};

use atelier_core::domain::ArtworkId;

use crate::infra::{app_state::AppState, errors::AppResult};
use crate::session::{SessionUser, session_username};
use crate::views;

pub const WELCOME_MESSAGES: [&str; 3] = ["Welcome, ", "Hope you’re well, ", "Let’s get cooking, "];

/// One greeting prefix, picked fresh for every page view.
pub fn welcome_message() -> &'static str {
    WELCOME_MESSAGES
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(WELCOME_MESSAGES[0])
}

/// `/`: the gallery for signed-in callers, the landing page otherwise.
pub async fn home(State(state): State<AppState>, jar: SignedCookieJar) -> AppResult<Response> {
    if session_username(&jar).is_some() {
        let artworks = state.catalog.list_artworks().await?;
        return Ok(views::dashboard(&artworks).into_response());
    }
    Ok(views::landing().into_response())
}

pub async fn dashboard(State(state): State<AppState>) -> AppResult<Response> {
    let artworks = state.catalog.list_artworks().await?;
    Ok(views::dashboard(&artworks).into_response())
}

pub async fn my_art(
    State(state): State<AppState>,
    Extension(session): Extension<SessionUser>,
) -> AppResult<Response> {
    let Some(user) = state.identity.find_by_username(&session.username).await? else {
        warn!(username = %session.username, "session refers to a missing user");
        return Ok(Redirect::to("/").into_response());
    };

    let artworks = state.ledger.list_owned(user.id).await?;
    Ok(views::my_art(welcome_message(), &user.username, &artworks).into_response())
}

/// Moves the artwork to the caller, whoever held it before.
pub async fn buy(
    State(state): State<AppState>,
    Extension(session): Extension<SessionUser>,
    Path(artwork_id): Path<i64>,
) -> AppResult<Response> {
    let artwork_id = ArtworkId(artwork_id);
    let Some(user) = state.identity.find_by_username(&session.username).await? else {
        warn!(username = %session.username, "session refers to a missing user");
        return Ok(Redirect::to("/").into_response());
    };

    state.ledger.transfer(artwork_id, user.id).await?;
    info!(username = %user.username, %artwork_id, "artwork bought");
    Ok(Redirect::to("/myart").into_response())
}
