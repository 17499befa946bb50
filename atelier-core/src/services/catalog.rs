use std::sync::Arc;

use crate::{
    database::ports::artworks::ArtworksRepository,
    domain::{Artwork, ArtworkId, NewArtwork},
    error::Result,
};

/// Read access to the artwork catalog, plus out-of-band seeding.
#[derive(Clone)]
pub struct CatalogService {
    artworks: Arc<dyn ArtworksRepository>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService").finish_non_exhaustive()
    }
}

impl CatalogService {
    pub fn new(artworks: Arc<dyn ArtworksRepository>) -> Self {
        Self { artworks }
    }

    pub async fn list_artworks(&self) -> Result<Vec<Artwork>> {
        self.artworks.list_artworks().await
    }

    pub async fn get_artwork(&self, id: ArtworkId) -> Result<Option<Artwork>> {
        self.artworks.get_artwork(id).await
    }

    pub async fn create_artwork(&self, artwork: NewArtwork) -> Result<Artwork> {
        let artwork = artwork.normalized()?;
        self.artworks.create_artwork(&artwork).await
    }
}
