use anyhow::Result;
use atelier_core::{
    AtelierError,
    domain::{ArtworkId, UserId},
};
use sqlx::SqlitePool;

#[path = "support/mod.rs"]
mod support;

use support::{harness, seed_artwork};

fn ids(artworks: &[atelier_core::domain::Artwork]) -> Vec<ArtworkId> {
    artworks.iter().map(|a| a.id).collect()
}

#[sqlx::test(migrator = "atelier_core::MIGRATOR")]
async fn assign_lists_artwork_for_owner(pool: SqlitePool) -> Result<()> {
    let h = harness(pool);
    let alice = h.identity.register("alice", "pw1").await?;
    let art = seed_artwork(&h.catalog, "Sunflowers", 1500).await;

    h.ledger.assign(alice.id, art.id).await?;

    assert_eq!(ids(&h.ledger.list_owned(alice.id).await?), vec![art.id]);
    assert_eq!(h.ledger.current_owner(art.id).await?, Some(alice));
    Ok(())
}

#[sqlx::test(migrator = "atelier_core::MIGRATOR")]
async fn transfer_moves_the_single_row(pool: SqlitePool) -> Result<()> {
    let h = harness(pool);
    let alice = h.identity.register("alice", "pw1").await?;
    let bob = h.identity.register("bob", "pw2").await?;
    let art = seed_artwork(&h.catalog, "Water Lilies", 900).await;

    let assigned = h.ledger.assign(alice.id, art.id).await?;
    let transferred = h.ledger.transfer(art.id, bob.id).await?;

    // The row is rewritten in place, not superseded.
    assert_eq!(assigned.id, transferred.id);
    assert_eq!(transferred.user_id, bob.id);

    assert!(h.ledger.list_owned(alice.id).await?.is_empty());
    assert_eq!(ids(&h.ledger.list_owned(bob.id).await?), vec![art.id]);
    assert_eq!(
        h.unit_of_work.ownership.count_for_artwork(art.id).await?,
        1
    );
    assert_eq!(h.ledger.current_owner(art.id).await?, Some(bob));
    Ok(())
}

#[sqlx::test(migrator = "atelier_core::MIGRATOR")]
async fn transfer_of_unowned_artwork_creates_row(pool: SqlitePool) -> Result<()> {
    let h = harness(pool);
    let bob = h.identity.register("bob", "pw2").await?;
    let art = seed_artwork(&h.catalog, "The Scream", 100).await;

    assert_eq!(h.ledger.current_owner(art.id).await?, None);
    h.ledger.transfer(art.id, bob.id).await?;

    assert_eq!(ids(&h.ledger.list_owned(bob.id).await?), vec![art.id]);
    assert_eq!(
        h.unit_of_work.ownership.count_for_artwork(art.id).await?,
        1
    );
    Ok(())
}

#[sqlx::test(migrator = "atelier_core::MIGRATOR")]
async fn transfer_to_current_owner_is_harmless(pool: SqlitePool) -> Result<()> {
    let h = harness(pool);
    let alice = h.identity.register("alice", "pw1").await?;
    let art = seed_artwork(&h.catalog, "Nighthawks", 100).await;

    h.ledger.transfer(art.id, alice.id).await?;
    h.ledger.transfer(art.id, alice.id).await?;

    assert_eq!(ids(&h.ledger.list_owned(alice.id).await?), vec![art.id]);
    assert_eq!(
        h.unit_of_work.ownership.count_for_artwork(art.id).await?,
        1
    );
    Ok(())
}

#[sqlx::test(migrator = "atelier_core::MIGRATOR")]
async fn assign_is_idempotent(pool: SqlitePool) -> Result<()> {
    let h = harness(pool);
    let alice = h.identity.register("alice", "pw1").await?;
    let art = seed_artwork(&h.catalog, "Guernica", 100).await;

    let first = h.ledger.assign(alice.id, art.id).await?;
    let second = h.ledger.assign(alice.id, art.id).await?;

    assert_eq!(first, second);
    assert_eq!(h.ledger.list_owned(alice.id).await?.len(), 1);
    Ok(())
}

#[sqlx::test(migrator = "atelier_core::MIGRATOR")]
async fn assign_refuses_to_create_a_second_owner(pool: SqlitePool) -> Result<()> {
    let h = harness(pool);
    let alice = h.identity.register("alice", "pw1").await?;
    let bob = h.identity.register("bob", "pw2").await?;
    let art = seed_artwork(&h.catalog, "The Kiss", 100).await;

    h.ledger.assign(alice.id, art.id).await?;
    let err = h.ledger.assign(bob.id, art.id).await.unwrap_err();

    assert!(matches!(err, AtelierError::Conflict(_)));
    assert_eq!(h.ledger.current_owner(art.id).await?, Some(alice));
    assert!(h.ledger.list_owned(bob.id).await?.is_empty());
    Ok(())
}

#[sqlx::test(migrator = "atelier_core::MIGRATOR")]
async fn unknown_user_or_artwork_is_not_found(pool: SqlitePool) -> Result<()> {
    let h = harness(pool);
    let alice = h.identity.register("alice", "pw1").await?;
    let art = seed_artwork(&h.catalog, "Composition VIII", 100).await;

    assert!(matches!(
        h.ledger.assign(UserId(999), art.id).await,
        Err(AtelierError::NotFound(_))
    ));
    assert!(matches!(
        h.ledger.assign(alice.id, ArtworkId(999)).await,
        Err(AtelierError::NotFound(_))
    ));
    assert!(matches!(
        h.ledger.transfer(ArtworkId(999), alice.id).await,
        Err(AtelierError::NotFound(_))
    ));
    assert!(matches!(
        h.ledger.transfer(art.id, UserId(999)).await,
        Err(AtelierError::NotFound(_))
    ));
    assert_eq!(h.unit_of_work.ownership.count_for_artwork(art.id).await?, 0);
    Ok(())
}

#[sqlx::test(migrator = "atelier_core::MIGRATOR")]
async fn list_owned_keeps_insertion_order(pool: SqlitePool) -> Result<()> {
    let h = harness(pool);
    let alice = h.identity.register("alice", "pw1").await?;
    let first = seed_artwork(&h.catalog, "First", 100).await;
    let second = seed_artwork(&h.catalog, "Second", 200).await;
    let third = seed_artwork(&h.catalog, "Third", 300).await;

    h.ledger.assign(alice.id, third.id).await?;
    h.ledger.assign(alice.id, first.id).await?;
    h.ledger.transfer(second.id, alice.id).await?;

    assert_eq!(
        ids(&h.ledger.list_owned(alice.id).await?),
        vec![third.id, first.id, second.id]
    );
    Ok(())
}

#[sqlx::test(migrator = "atelier_core::MIGRATOR")]
async fn concurrent_transfers_leave_exactly_one_owner(pool: SqlitePool) -> Result<()> {
    let h = harness(pool);
    let alice = h.identity.register("alice", "pw1").await?;
    let bob = h.identity.register("bob", "pw2").await?;
    let art = seed_artwork(&h.catalog, "Contested", 100).await;

    let (a, b) = tokio::join!(
        h.ledger.transfer(art.id, alice.id),
        h.ledger.transfer(art.id, bob.id)
    );
    a?;
    b?;

    assert_eq!(h.unit_of_work.ownership.count_for_artwork(art.id).await?, 1);
    let owner = h.ledger.current_owner(art.id).await?.expect("owned");
    assert!(owner.id == alice.id || owner.id == bob.id);

    let total_listed = h.ledger.list_owned(alice.id).await?.len()
        + h.ledger.list_owned(bob.id).await?.len();
    assert_eq!(total_listed, 1);
    Ok(())
}
