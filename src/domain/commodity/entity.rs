//! Commodity entity and related types

use serde::{Deserialize, Serialize};

use super::validation::{
    check_rating, validate_commodity_id, validate_commodity_name, validate_price,
    CommodityValidationError,
};
use crate::domain::storage::StorageEntity;
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Commodity identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommodityId(String);

impl CommodityId {
    /// Create a new CommodityId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, CommodityValidationError> {
        let id = id.into();
        validate_commodity_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CommodityId {
    type Error = CommodityValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CommodityId> for String {
    fn from(id: CommodityId) -> Self {
        id.0
    }
}

impl std::fmt::Display for CommodityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single user's rating of a commodity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRating {
    pub username: UserId,
    pub score: u8,
}

/// Catalog item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commodity {
    id: CommodityId,
    name: String,
    /// Provider name
    provider: String,
    category: String,
    price: f64,
    /// At most one entry per user, in the order users first rated
    ratings: Vec<UserRating>,
}

impl Commodity {
    /// Create a new commodity with no ratings
    pub fn new(
        id: CommodityId,
        name: impl Into<String>,
        provider: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Result<Self, CommodityValidationError> {
        let name = name.into();
        validate_commodity_name(&name)?;
        validate_price(price)?;

        Ok(Self {
            id,
            name,
            provider: provider.into(),
            category: category.into(),
            price,
            ratings: Vec::new(),
        })
    }

    // Getters

    pub fn id(&self) -> &CommodityId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn ratings(&self) -> &[UserRating] {
        &self.ratings
    }

    /// Rating previously submitted by `username`, if any
    pub fn rating_by(&self, username: &UserId) -> Option<u8> {
        self.ratings
            .iter()
            .find(|r| &r.username == username)
            .map(|r| r.score)
    }

    /// Arithmetic mean of the current ratings, `0.0` when nobody has rated
    pub fn average_rating(&self) -> f64 {
        if self.ratings.is_empty() {
            return 0.0;
        }

        let total: u32 = self.ratings.iter().map(|r| u32::from(r.score)).sum();
        f64::from(total) / self.ratings.len() as f64
    }

    // Mutators

    /// Record `score` for `username`, replacing that user's previous rating.
    ///
    /// Returns the score that was replaced, if any.
    pub fn rate(&mut self, username: UserId, score: u8) -> Result<Option<u8>, DomainError> {
        let score = check_rating(i64::from(score))?;

        if let Some(existing) = self.ratings.iter_mut().find(|r| r.username == username) {
            let previous = existing.score;
            existing.score = score;
            return Ok(Some(previous));
        }

        self.ratings.push(UserRating { username, score });
        Ok(None)
    }
}

impl StorageEntity for Commodity {
    type Key = CommodityId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}
