use async_trait::async_trait;

use crate::domain::{Artwork, ArtworkId, NewArtwork};
use crate::error::Result;

// Catalog store
#[async_trait]
pub trait ArtworksRepository: Send + Sync {
    async fn create_artwork(&self, artwork: &NewArtwork) -> Result<Artwork>;
    async fn get_artwork(&self, id: ArtworkId) -> Result<Option<Artwork>>;
    async fn list_artworks(&self) -> Result<Vec<Artwork>>;
}
