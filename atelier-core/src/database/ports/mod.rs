//! Repository ports (interfaces) for the three stores.
//!
//! Services depend on these traits; the SQLite adapters live under
//! [`crate::database::sqlite`].

pub mod artworks;
pub mod ownership;
pub mod users;
