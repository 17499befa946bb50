//! # Atelier Core
//!
//! Domain types, storage and business rules for the Atelier artwork
//! storefront.
//!
//! ## Overview
//!
//! - **Identity store**: registered users with Argon2id password hashes
//! - **Catalog store**: artworks with a title, optional image and price
//! - **Ownership ledger**: which user currently holds which artwork
//!
//! ## Architecture
//!
//! - [`domain`]: plain data types and input validation
//! - [`database`]: repository ports and their SQLite adapters
//! - [`services`]: identity, catalog and ledger operations built on the ports
//! - [`crypto`]: password hashing
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use atelier_core::{
//!     crypto::PasswordCrypto,
//!     database::{AppUnitOfWork, SqliteDatabase},
//!     domain::ArtworkId,
//!     services::{IdentityService, OwnershipLedger},
//! };
//!
//! async fn buy(db: &SqliteDatabase) -> atelier_core::Result<()> {
//!     let uow = AppUnitOfWork::sqlite(db);
//!     let crypto = Arc::new(PasswordCrypto::new("pepper")?);
//!     let identity = IdentityService::new(uow.users.clone(), crypto);
//!     let ledger = OwnershipLedger::new(uow);
//!
//!     let alice = identity.register("alice", "pw1").await?;
//!     ledger.transfer(ArtworkId(1), alice.id).await?;
//!     Ok(())
//! }
//! ```

pub mod crypto;
pub mod database;
pub mod domain;
pub mod error;
pub mod services;

pub use error::{AtelierError, Result};

/// Embedded schema migrations.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
