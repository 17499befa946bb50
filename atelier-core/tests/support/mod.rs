#![allow(dead_code)]

use std::sync::Arc;

use atelier_core::{
    crypto::PasswordCrypto,
    database::{AppUnitOfWork, SqliteDatabase},
    domain::{Artwork, NewArtwork, Price},
    services::{CatalogService, IdentityService, OwnershipLedger},
};
use sqlx::SqlitePool;

#[derive(Debug)]
pub struct Harness {
    pub unit_of_work: AppUnitOfWork,
    pub identity: IdentityService,
    pub catalog: CatalogService,
    pub ledger: OwnershipLedger,
}

pub fn harness(pool: SqlitePool) -> Harness {
    let db = SqliteDatabase::from_pool(pool);
    let unit_of_work = AppUnitOfWork::sqlite(&db);
    // Argon2 minimum cost keeps registration fast in tests.
    let crypto = Arc::new(
        PasswordCrypto::with_cost("test-pepper", 8, 1).expect("valid test params"),
    );

    Harness {
        identity: IdentityService::new(unit_of_work.users.clone(), crypto),
        catalog: CatalogService::new(unit_of_work.artworks.clone()),
        ledger: OwnershipLedger::new(unit_of_work.clone()),
        unit_of_work,
    }
}

pub async fn seed_artwork(catalog: &CatalogService, title: &str, cents: i64) -> Artwork {
    catalog
        .create_artwork(NewArtwork::new(
            title,
            Some(format!("https://img.example/{cents}.png")),
            Price::from_cents(cents).expect("non-negative price"),
        ))
        .await
        .expect("artwork seeded")
}
