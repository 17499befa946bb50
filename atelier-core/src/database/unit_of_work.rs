use std::any::type_name_of_val;
use std::fmt;
use std::sync::Arc;

use crate::database::{
    ports::{
        artworks::ArtworksRepository, ownership::OwnershipRepository,
        users::UsersRepository,
    },
    sqlite::{
        SqliteArtworksRepository, SqliteDatabase, SqliteOwnershipRepository,
        SqliteUsersRepository,
    },
};

/// Aggregates the repository ports used by application services.
#[derive(Clone)]
pub struct AppUnitOfWork {
    pub users: Arc<dyn UsersRepository>,
    pub artworks: Arc<dyn ArtworksRepository>,
    pub ownership: Arc<dyn OwnershipRepository>,
}

impl fmt::Debug for AppUnitOfWork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppUnitOfWork")
            .field("users", &type_name_of_val(self.users.as_ref()))
            .field("artworks", &type_name_of_val(self.artworks.as_ref()))
            .field("ownership", &type_name_of_val(self.ownership.as_ref()))
            .finish()
    }
}

impl AppUnitOfWork {
    pub fn sqlite(db: &SqliteDatabase) -> Self {
        let pool = db.pool().clone();
        Self {
            users: Arc::new(SqliteUsersRepository::new(pool.clone())),
            artworks: Arc::new(SqliteArtworksRepository::new(pool.clone())),
            ownership: Arc::new(SqliteOwnershipRepository::new(pool)),
        }
    }
}
