use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::ports::ownership::OwnershipRepository;
use crate::{
    domain::{Artwork, ArtworkId, Ownership, User, UserId},
    error::Result,
};

/// SQLite-backed implementation of the `OwnershipRepository` port.
///
/// The unique index on `ownership.artwork_id` is what keeps the ledger to a
/// single row per artwork; both writes below lean on it as their conflict
/// target.
#[derive(Clone, Debug)]
pub struct SqliteOwnershipRepository {
    pool: SqlitePool,
}

impl SqliteOwnershipRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OwnershipRepository for SqliteOwnershipRepository {
    async fn insert_if_unowned(
        &self,
        user_id: UserId,
        artwork_id: ArtworkId,
    ) -> Result<Ownership> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO ownership (user_id, artwork_id, acquired_at)
            VALUES (?, ?, ?)
            ON CONFLICT (artwork_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(artwork_id)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        let row = sqlx::query_as::<_, Ownership>(
            r#"
            SELECT id, user_id, artwork_id, acquired_at
            FROM ownership
            WHERE artwork_id = ?
            "#,
        )
        .bind(artwork_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row)
    }

    async fn reassign(&self, artwork_id: ArtworkId, user_id: UserId) -> Result<Ownership> {
        let row = sqlx::query_as::<_, Ownership>(
            r#"
            INSERT INTO ownership (user_id, artwork_id, acquired_at)
            VALUES (?, ?, ?)
            ON CONFLICT (artwork_id) DO UPDATE
                SET user_id = excluded.user_id,
                    acquired_at = excluded.acquired_at
            RETURNING id, user_id, artwork_id, acquired_at
            "#,
        )
        .bind(user_id)
        .bind(artwork_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn get_owner(&self, artwork_id: ArtworkId) -> Result<Option<User>> {
        let owner = sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.username, u.created_at
            FROM users u
            JOIN ownership o ON o.user_id = u.id
            WHERE o.artwork_id = ?
            "#,
        )
        .bind(artwork_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(owner)
    }

    async fn list_owned_artworks(&self, user_id: UserId) -> Result<Vec<Artwork>> {
        let artworks = sqlx::query_as::<_, Artwork>(
            r#"
            SELECT a.id, a.title, a.image_url, a.price_cents, a.created_at
            FROM artworks a
            JOIN ownership o ON o.artwork_id = a.id
            WHERE o.user_id = ?
            ORDER BY o.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(artworks)
    }

    async fn count_for_artwork(&self, artwork_id: ArtworkId) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM ownership WHERE artwork_id = ?",
        )
        .bind(artwork_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
