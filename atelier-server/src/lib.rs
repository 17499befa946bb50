//! # Atelier Server
//!
//! HTTP front end for the Atelier storefront: account forms, the artwork
//! dashboard, the buy flow and the admin ownership endpoints.
//!
//! Sessions are signed cookies holding the username (see [`session`]).
//! Pages are rendered on the server with maud (see [`views`]).

pub mod handlers;
pub mod infra;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod views;

pub use infra::app_state::AppState;
