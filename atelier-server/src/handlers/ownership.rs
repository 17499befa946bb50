//! Operator endpoints for editing the ledger directly. Mounted behind the
//! admin gate.

use axum::{
    extract::{Extension, Path, State},
    response::Redirect,
};
use tracing::info;

use atelier_core::domain::{ArtworkId, UserId};

use crate::infra::{app_state::AppState, errors::AppResult};
use crate::session::SessionUser;

pub async fn assign(
    State(state): State<AppState>,
    Extension(admin): Extension<SessionUser>,
    Path((user_id, artwork_id)): Path<(i64, i64)>,
) -> AppResult<Redirect> {
    let row = state
        .ledger
        .assign(UserId(user_id), ArtworkId(artwork_id))
        .await?;
    info!(admin = %admin.username, user_id = %row.user_id, artwork_id = %row.artwork_id, "admin assigned artwork");
    Ok(Redirect::to("/dashboard"))
}

pub async fn transfer(
    State(state): State<AppState>,
    Extension(admin): Extension<SessionUser>,
    Path((artwork_id, new_user_id)): Path<(i64, i64)>,
) -> AppResult<Redirect> {
    let row = state
        .ledger
        .transfer(ArtworkId(artwork_id), UserId(new_user_id))
        .await?;
    info!(admin = %admin.username, user_id = %row.user_id, artwork_id = %row.artwork_id, "admin transferred artwork");
    Ok(Redirect::to("/dashboard"))
}
