use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::ArtworkId;
use crate::error::{AtelierError, Result};

/// Longest artwork title the catalog accepts, in characters.
pub const MAX_TITLE_LEN: usize = 100;

/// Non-negative amount in minor currency units (cents).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct Price(i64);

impl Price {
    pub fn from_cents(cents: i64) -> Result<Self> {
        if cents < 0 {
            return Err(AtelierError::Validation(
                "Price cannot be negative.".to_string(),
            ));
        }
        Ok(Self(cents))
    }

    pub fn cents(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = AtelierError;

    /// Parses `12`, `12.5` or `12.50`. More than two decimals is rejected
    /// rather than rounded.
    fn from_str(raw: &str) -> Result<Self> {
        let invalid =
            || AtelierError::Validation(format!("Invalid price: {raw:?}"));

        let trimmed = raw.trim();
        if trimmed.starts_with('-') {
            return Err(AtelierError::Validation(
                "Price cannot be negative.".to_string(),
            ));
        }

        let (whole, frac) = trimmed.split_once('.').unwrap_or((trimmed, ""));
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty()
            || !all_digits(whole)
            || frac.len() > 2
            || !all_digits(frac)
        {
            return Err(invalid());
        }

        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        whole
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(frac))
            .map(Price)
            .ok_or_else(invalid)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    pub image_url: Option<String>,
    #[sqlx(rename = "price_cents")]
    pub price: Price,
    pub created_at: DateTime<Utc>,
}

/// Catalog entry as submitted by an operator, before it has an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewArtwork {
    pub title: String,
    pub image_url: Option<String>,
    pub price: Price,
}

impl NewArtwork {
    pub fn new(
        title: impl Into<String>,
        image_url: Option<String>,
        price: Price,
    ) -> Self {
        Self {
            title: title.into(),
            image_url,
            price,
        }
    }

    /// Trim fields and enforce the catalog constraints.
    pub fn normalized(self) -> Result<Self> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(AtelierError::Validation(
                "Artwork title cannot be empty.".to_string(),
            ));
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(AtelierError::Validation(format!(
                "Artwork title must be at most {MAX_TITLE_LEN} characters."
            )));
        }

        let image_url = self
            .image_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        Ok(Self {
            title,
            image_url,
            price: self.price,
        })
    }
}
