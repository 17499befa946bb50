//! Registered identities.
//!
//! A [`User`] never carries its password hash; the hash lives behind
//! [`UsersRepository::get_user_password_hash`](crate::database::ports::users::UsersRepository::get_user_password_hash)
//! and is only read while verifying credentials.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::UserId;
use crate::error::{AtelierError, Result};

/// Longest username the identity store accepts, in characters.
pub const MAX_USERNAME_LEN: usize = 25;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Normalize a submitted username, rejecting blank or oversized input.
pub fn normalize_username(raw: &str) -> Result<String> {
    let username = raw.trim();
    if username.is_empty() {
        return Err(AtelierError::Validation(
            "Username cannot be empty!".to_string(),
        ));
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(AtelierError::Validation(format!(
            "Username must be at most {MAX_USERNAME_LEN} characters."
        )));
    }
    Ok(username.to_string())
}

/// Form payload shared by the login and registration endpoints.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_usernames_are_rejected() {
        for raw in ["", "   ", "\t\n"] {
            let err = normalize_username(raw).unwrap_err();
            assert!(matches!(err, AtelierError::Validation(_)));
            assert_eq!(err.to_string(), "Username cannot be empty!");
        }
    }

    #[test]
    fn usernames_are_trimmed() {
        assert_eq!(normalize_username("  alice ").unwrap(), "alice");
    }

    #[test]
    fn length_limit_counts_characters() {
        let at_limit = "é".repeat(MAX_USERNAME_LEN);
        assert_eq!(normalize_username(&at_limit).unwrap(), at_limit);

        let over = "a".repeat(MAX_USERNAME_LEN + 1);
        assert!(matches!(
            normalize_username(&over),
            Err(AtelierError::Validation(_))
        ));
    }

    #[test]
    fn credentials_debug_hides_password() {
        let creds = Credentials {
            username: "alice".into(),
            password: "hunter2".into(),
        };
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));
    }
}
