//! Ownership ledger.
//!
//! Transfers follow the reassign policy: every artwork has at most one
//! ownership row, and a transfer overwrites that row's holder in place. No
//! history is kept, so the current owner of an artwork is always the holder
//! of its single row.
//!
//! Two buyers racing for the same artwork both succeed; the database
//! serializes the upserts and the later write wins.

use tracing::info;

use crate::{
    database::AppUnitOfWork,
    domain::{Artwork, ArtworkId, Ownership, User, UserId},
    error::{AtelierError, Result},
};

#[derive(Clone, Debug)]
pub struct OwnershipLedger {
    unit_of_work: AppUnitOfWork,
}

impl OwnershipLedger {
    pub fn new(unit_of_work: AppUnitOfWork) -> Self {
        Self { unit_of_work }
    }

    /// Grant `artwork_id` to `user_id`.
    ///
    /// Granting the same pair twice is a no-op that returns the existing row.
    /// Granting an artwork that someone else already holds is a `Conflict`;
    /// use [`OwnershipLedger::transfer`] to move it.
    pub async fn assign(&self, user_id: UserId, artwork_id: ArtworkId) -> Result<Ownership> {
        self.ensure_exists(user_id, artwork_id).await?;

        let row = self
            .unit_of_work
            .ownership
            .insert_if_unowned(user_id, artwork_id)
            .await?;

        if row.user_id != user_id {
            return Err(AtelierError::Conflict(format!(
                "Artwork {artwork_id} is already owned by another user"
            )));
        }

        info!(%user_id, %artwork_id, "assigned artwork");
        Ok(row)
    }

    /// Make `new_user_id` the holder of `artwork_id`, whoever held it before.
    pub async fn transfer(
        &self,
        artwork_id: ArtworkId,
        new_user_id: UserId,
    ) -> Result<Ownership> {
        self.ensure_exists(new_user_id, artwork_id).await?;

        let row = self
            .unit_of_work
            .ownership
            .reassign(artwork_id, new_user_id)
            .await?;

        info!(%artwork_id, new_user_id = %row.user_id, "transferred artwork");
        Ok(row)
    }

    pub async fn current_owner(&self, artwork_id: ArtworkId) -> Result<Option<User>> {
        self.unit_of_work.ownership.get_owner(artwork_id).await
    }

    /// Artworks currently held by `user_id`, in the order they were first
    /// recorded in the ledger.
    pub async fn list_owned(&self, user_id: UserId) -> Result<Vec<Artwork>> {
        self.unit_of_work
            .ownership
            .list_owned_artworks(user_id)
            .await
    }

    async fn ensure_exists(&self, user_id: UserId, artwork_id: ArtworkId) -> Result<()> {
        if self.unit_of_work.users.get_user_by_id(user_id).await?.is_none() {
            return Err(AtelierError::NotFound(format!("User {user_id} does not exist")));
        }
        if self
            .unit_of_work
            .artworks
            .get_artwork(artwork_id)
            .await?
            .is_none()
        {
            return Err(AtelierError::NotFound(format!(
                "Artwork {artwork_id} does not exist"
            )));
        }
        Ok(())
    }
}
