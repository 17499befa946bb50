use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    crypto::PasswordCrypto,
    database::ports::users::UsersRepository,
    domain::{User, UserId, user::normalize_username},
    error::{AtelierError, Result},
};

/// Registration and credential checks against the identity store.
#[derive(Clone)]
pub struct IdentityService {
    users: Arc<dyn UsersRepository>,
    crypto: Arc<PasswordCrypto>,
}

impl std::fmt::Debug for IdentityService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityService").finish_non_exhaustive()
    }
}

impl IdentityService {
    pub fn new(users: Arc<dyn UsersRepository>, crypto: Arc<PasswordCrypto>) -> Self {
        Self { users, crypto }
    }

    /// Create a new identity.
    ///
    /// Fails with `Validation` for a blank or oversized username and with
    /// `Conflict` when the username is taken. The stored hash of an existing
    /// user is never touched.
    pub async fn register(&self, username: &str, password: &str) -> Result<User> {
        let username = normalize_username(username)?;

        if self.users.get_user_by_username(&username).await?.is_some() {
            return Err(AtelierError::Conflict("User already exists!".to_string()));
        }

        let password_hash = self.hash(password).await?;
        let user = self
            .users
            .create_user_with_password(&username, &password_hash)
            .await?;

        info!(user_id = %user.id, username = %user.username, "registered user");
        Ok(user)
    }

    /// Check a username/password pair.
    ///
    /// `NotFound` for an unknown username, `Auth` for a wrong password.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User> {
        let username = username.trim();
        let user = self
            .users
            .get_user_by_username(username)
            .await?
            .ok_or_else(|| AtelierError::NotFound("User does not exist!".to_string()))?;

        let stored_hash = self
            .users
            .get_user_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                AtelierError::Internal(format!("user {} has no password hash", user.id))
            })?;

        if !self.verify(password, stored_hash).await? {
            warn!(username = %user.username, "rejected login with wrong password");
            return Err(AtelierError::Auth(
                "Incorrect username or password.".to_string(),
            ));
        }

        info!(user_id = %user.id, username = %user.username, "authenticated user");
        Ok(user)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        self.users.get_user_by_username(username).await
    }

    pub async fn find_by_id(&self, id: UserId) -> Result<Option<User>> {
        self.users.get_user_by_id(id).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.users.get_all_users().await
    }

    async fn hash(&self, password: &str) -> Result<String> {
        let crypto = Arc::clone(&self.crypto);
        let password = zeroize::Zeroizing::new(password.to_string());
        tokio::task::spawn_blocking(move || crypto.hash_password(&password))
            .await
            .map_err(|err| AtelierError::Internal(format!("hashing task failed: {err}")))?
            .map_err(AtelierError::from)
    }

    async fn verify(&self, password: &str, stored_hash: String) -> Result<bool> {
        let crypto = Arc::clone(&self.crypto);
        let password = zeroize::Zeroizing::new(password.to_string());
        tokio::task::spawn_blocking(move || crypto.verify_password(&password, &stored_hash))
            .await
            .map_err(|err| AtelierError::Internal(format!("verification task failed: {err}")))?
            .map_err(AtelierError::from)
    }
}
