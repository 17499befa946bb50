pub mod artwork;
pub mod ids;
pub mod ownership;
pub mod user;

pub use artwork::{Artwork, NewArtwork, Price};
pub use ids::{ArtworkId, UserId};
pub use ownership::Ownership;
pub use user::{Credentials, User};
