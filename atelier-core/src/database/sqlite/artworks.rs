use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

use crate::database::ports::artworks::ArtworksRepository;
use crate::{
    domain::{Artwork, ArtworkId, NewArtwork},
    error::Result,
};

const ARTWORK_COLUMNS: &str = "id, title, image_url, price_cents, created_at";

/// SQLite-backed implementation of the `ArtworksRepository` port.
#[derive(Clone, Debug)]
pub struct SqliteArtworksRepository {
    pool: SqlitePool,
}

impl SqliteArtworksRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArtworksRepository for SqliteArtworksRepository {
    async fn create_artwork(&self, artwork: &NewArtwork) -> Result<Artwork> {
        let created = sqlx::query_as::<_, Artwork>(&format!(
            r#"
            INSERT INTO artworks (title, image_url, price_cents, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING {ARTWORK_COLUMNS}
            "#
        ))
        .bind(&artwork.title)
        .bind(&artwork.image_url)
        .bind(artwork.price)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        info!(artwork_id = %created.id, title = %created.title, "created artwork");
        Ok(created)
    }

    async fn get_artwork(&self, id: ArtworkId) -> Result<Option<Artwork>> {
        let artwork = sqlx::query_as::<_, Artwork>(&format!(
            "SELECT {ARTWORK_COLUMNS} FROM artworks WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(artwork)
    }

    async fn list_artworks(&self) -> Result<Vec<Artwork>> {
        let artworks = sqlx::query_as::<_, Artwork>(&format!(
            "SELECT {ARTWORK_COLUMNS} FROM artworks ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(artworks)
    }
}
