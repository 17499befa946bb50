use async_trait::async_trait;

use crate::domain::{Artwork, ArtworkId, Ownership, User, UserId};
use crate::error::Result;

// Ownership ledger. Implementations must keep at most one row per artwork.
#[async_trait]
pub trait OwnershipRepository: Send + Sync {
    /// Insert a row for `artwork_id` unless one already exists, then return
    /// whichever row the artwork has afterwards.
    async fn insert_if_unowned(
        &self,
        user_id: UserId,
        artwork_id: ArtworkId,
    ) -> Result<Ownership>;

    /// Point the artwork's row at `user_id`, creating the row if the artwork
    /// was never owned. Must be a single atomic write.
    async fn reassign(&self, artwork_id: ArtworkId, user_id: UserId) -> Result<Ownership>;

    async fn get_owner(&self, artwork_id: ArtworkId) -> Result<Option<User>>;
    async fn list_owned_artworks(&self, user_id: UserId) -> Result<Vec<Artwork>>;
    async fn count_for_artwork(&self, artwork_id: ArtworkId) -> Result<i64>;
}
