#![allow(dead_code)]

use std::collections::BTreeSet;

use anyhow::Result;
use axum::{Router, http::StatusCode};
use axum_test::TestServer;
use sqlx::SqlitePool;

use atelier_core::{
    crypto::PasswordCrypto,
    database::SqliteDatabase,
    domain::{Artwork, NewArtwork, Price, UserId},
};
use atelier_server::{
    AppState,
    infra::config::{AuthConfig, Config, DatabaseConfig, ServerConfig},
    routes,
};

pub const ADMIN: &str = "admin";

pub struct TestApp {
    pub state: AppState,
}

impl TestApp {
    pub fn router(&self) -> Router {
        routes::build_app(self.state.clone())
    }

    /// A fresh client with its own cookie jar, sharing the app's database.
    pub fn client(&self) -> Result<TestServer> {
        TestServer::builder()
            .save_cookies()
            .build(self.router())
            .map_err(|err| anyhow::anyhow!(err.to_string()))
    }

    pub async fn seed_artwork(&self, title: &str, cents: i64) -> Result<Artwork> {
        let artwork = self
            .state
            .catalog
            .create_artwork(NewArtwork::new(title, None, Price::from_cents(cents)?))
            .await?;
        Ok(artwork)
    }

    pub async fn user_id(&self, username: &str) -> Result<UserId> {
        let user = self
            .state
            .identity
            .find_by_username(username)
            .await?
            .ok_or_else(|| anyhow::anyhow!("user {username} missing"))?;
        Ok(user.id)
    }
}

pub fn build_test_app(pool: SqlitePool) -> Result<TestApp> {
    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
        },
        auth: AuthConfig {
            password_pepper: "test-pepper".to_string(),
            session_secret: Some("test-session-secret".to_string()),
            admin_users: BTreeSet::from([ADMIN.to_string()]),
            secure_cookies: false,
        },
    };
    let crypto = PasswordCrypto::with_cost("test-pepper", 8, 1)?;
    let db = SqliteDatabase::from_pool(pool);

    Ok(TestApp {
        state: AppState::new(&db, config, crypto),
    })
}

/// Register through the form, leaving the session cookie in the client's jar.
pub async fn register(server: &TestServer, username: &str, password: &str) {
    server
        .post("/register")
        .form(&[("username", username), ("password", password)])
        .await
        .assert_status(StatusCode::SEE_OTHER);
}

pub async fn login(server: &TestServer, username: &str, password: &str) {
    server
        .post("/login")
        .form(&[("username", username), ("password", password)])
        .await
        .assert_status(StatusCode::SEE_OTHER);
}

pub fn location(response: &axum_test::TestResponse) -> String {
    response
        .header("location")
        .to_str()
        .expect("ascii location header")
        .to_string()
}
