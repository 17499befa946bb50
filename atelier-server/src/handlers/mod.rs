pub mod auth;
pub mod gallery;
pub mod ownership;

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
