use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ArtworkId, UserId};

/// A claim that `user_id` currently holds `artwork_id`.
///
/// The ledger keeps at most one row per artwork; a transfer rewrites
/// `user_id` in place and refreshes `acquired_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Ownership {
    pub id: i64,
    pub user_id: UserId,
    pub artwork_id: ArtworkId,
    pub acquired_at: DateTime<Utc>,
}
