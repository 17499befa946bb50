use async_trait::async_trait;

use crate::domain::{User, UserId};
use crate::error::Result;

// Identity store
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Insert a user and its password hash. A taken username is reported as
    /// [`AtelierError::Conflict`](crate::error::AtelierError::Conflict).
    async fn create_user_with_password(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<User>;
    async fn get_user_by_id(&self, id: UserId) -> Result<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    async fn get_all_users(&self) -> Result<Vec<User>>;
    async fn get_user_password_hash(&self, id: UserId) -> Result<Option<String>>;
}
