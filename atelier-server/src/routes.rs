use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{self, auth, gallery, ownership};
use crate::infra::app_state::AppState;
use crate::middleware::{require_admin, require_session};

/// All application routes, still waiting for their state.
pub fn create_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(gallery::home))
        .route("/index", get(auth::index))
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/logout", get(auth::logout))
        .route("/health", get(handlers::health))
        .merge(create_protected_routes(state.clone()))
        .merge(create_admin_routes(state))
}

fn create_protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(gallery::dashboard))
        .route("/myart", get(gallery::my_art))
        .route("/buy/{artwork_id}", get(gallery::buy))
        .route_layer(middleware::from_fn_with_state(state, require_session))
}

fn create_admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/assign_ownership/{user_id}/{artwork_id}",
            post(ownership::assign),
        )
        .route(
            "/transfer_ownership/{artwork_id}/{new_user_id}",
            post(ownership::transfer),
        )
        .route_layer(middleware::from_fn_with_state(state, require_admin))
}

/// Router with state and request tracing applied, ready to serve.
pub fn build_app(state: AppState) -> Router {
    create_router(state.clone())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
