//! Seed data - populates the entity store from a JSON document
//!
//! ```json
//! {
//!   "users": [{ "username": "u1", "email": "u1@example.com", "credit": 10 }],
//!   "commodities": [{ "id": "1", "name": "Phone", "provider": "Samsung",
//!                     "category": "electronics", "price": 100,
//!                     "ratings": [{ "username": "u1", "score": 4 }] }],
//!   "comments": [{ "username": "u1", "commodity_id": "1", "text": "nice" }]
//! }
//! ```

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::info;

use crate::domain::commodity::{Commodity, CommodityId};
use crate::domain::user::{credit_to_micros, User, UserId};
use crate::domain::DomainError;
use crate::infrastructure::services::MarketplaceService;

/// Seeded user
#[derive(Debug, Clone, Deserialize)]
pub struct SeedUser {
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub credit: f64,
}

/// Initial rating attached to a seeded commodity
#[derive(Debug, Clone, Deserialize)]
pub struct SeedRating {
    pub username: String,
    pub score: i64,
}

/// Seeded commodity
#[derive(Debug, Clone, Deserialize)]
pub struct SeedCommodity {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub ratings: Vec<SeedRating>,
}

/// Seeded comment
#[derive(Debug, Clone, Deserialize)]
pub struct SeedComment {
    pub username: String,
    pub commodity_id: String,
    pub text: String,
}

/// Full seed document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<SeedUser>,
    #[serde(default)]
    pub commodities: Vec<SeedCommodity>,
    #[serde(default)]
    pub comments: Vec<SeedComment>,
}

/// Number of records in a seed document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub commodities: usize,
    pub comments: usize,
}

impl std::fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} users, {} commodities, {} comments",
            self.users, self.commodities, self.comments
        )
    }
}

impl SeedData {
    /// Parse a seed document from JSON text
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read and parse a seed file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;

        Self::from_json(&contents)
            .with_context(|| format!("Failed to parse seed file {}", path.display()))
    }

    pub fn summary(&self) -> SeedSummary {
        SeedSummary {
            users: self.users.len(),
            commodities: self.commodities.len(),
            comments: self.comments.len(),
        }
    }

    /// Insert every record through `service`.
    ///
    /// Users go in first, then commodities, then comments, so comments are
    /// checked against the records seeded before them and draw their ids
    /// from the service's counter.
    pub async fn apply(self, service: &MarketplaceService) -> Result<SeedSummary, DomainError> {
        let summary = self.summary();
        let store = service.store();

        for seed in self.users {
            store.insert_user(seed.into_user()?).await?;
        }

        for seed in self.commodities {
            store.insert_commodity(seed.into_commodity()?).await?;
        }

        for seed in self.comments {
            service
                .add_comment(&seed.commodity_id, &seed.username, &seed.text)
                .await?;
        }

        info!(
            users = summary.users,
            commodities = summary.commodities,
            comments = summary.comments,
            "Seeded entity store"
        );

        Ok(summary)
    }
}

impl SeedUser {
    fn into_user(self) -> Result<User, DomainError> {
        let id = UserId::new(self.username).map_err(|e| DomainError::validation(e.to_string()))?;
        let mut user = User::new(id, self.email, self.address)
            .with_credit_micros(credit_to_micros(self.credit)?);

        if let Some(birth_date) = self.birth_date {
            user = user.with_birth_date(birth_date);
        }

        Ok(user)
    }
}

impl SeedCommodity {
    fn into_commodity(self) -> Result<Commodity, DomainError> {
        let invalid = |e: crate::domain::commodity::CommodityValidationError| {
            DomainError::validation(e.to_string())
        };

        let id = CommodityId::new(self.id).map_err(invalid)?;
        let mut commodity =
            Commodity::new(id, self.name, self.provider, self.category, self.price).map_err(invalid)?;

        for rating in self.ratings {
            let username =
                UserId::new(rating.username).map_err(|e| DomainError::validation(e.to_string()))?;
            let score =
                u8::try_from(rating.score).map_err(|_| DomainError::invalid_rating(rating.score))?;
            commodity.rate(username, score)?;
        }

        Ok(commodity)
    }
}

#[cfg(test)]
mod tests {
    use tokio_test::{assert_err, assert_ok};

    use super::*;
    use crate::infrastructure::storage::StorageFactory;

    const SEED: &str = r#"{
        "users": [
            { "username": "u1", "email": "u1@example.com", "address": "Tehran",
              "birth_date": "1990-01-01", "credit": 10 },
            { "username": "u2", "email": "u2@example.com" }
        ],
        "commodities": [
            { "id": "1", "name": "Galaxy S21", "provider": "Samsung",
              "category": "electronics", "price": 700,
              "ratings": [{ "username": "u1", "score": 4 }, { "username": "u2", "score": 5 }] },
            { "id": "2", "name": "Cotton Shirt", "provider": "Zara",
              "category": "clothing", "price": 20 }
        ],
        "comments": [
            { "username": "u1", "commodity_id": "1", "text": "great phone" },
            { "username": "u2", "commodity_id": "1", "text": "too pricey" }
        ]
    }"#;

    fn service() -> MarketplaceService {
        MarketplaceService::new(StorageFactory::in_memory_entity_store())
    }

    #[test]
    fn test_parse_and_summary() {
        let seed = SeedData::from_json(SEED).unwrap();
        assert_eq!(
            seed.summary(),
            SeedSummary {
                users: 2,
                commodities: 2,
                comments: 2
            }
        );
        assert_eq!(seed.summary().to_string(), "2 users, 2 commodities, 2 comments");
    }

    #[test]
    fn test_empty_document() {
        let seed = SeedData::from_json("{}").unwrap();
        assert_eq!(seed.summary().users, 0);
    }

    #[test]
    fn test_malformed_document() {
        assert_err!(SeedData::from_json("{ \"users\": 3 }"));
        assert_err!(SeedData::from_json(r#"{ "users": [{ "email": "no-name@example.com" }] }"#));
    }

    #[tokio::test]
    async fn test_apply_populates_store() {
        let service = service();
        assert_ok!(SeedData::from_json(SEED).unwrap().apply(&service).await);

        let user = service.get_user("u1").await.unwrap();
        assert_eq!(user.credit(), 10.0);
        assert_eq!(user.birth_date(), Some("1990-01-01"));

        assert_eq!(service.average_rating("1").await.unwrap(), 4.5);
        assert_eq!(service.list_comments("1").await.unwrap().len(), 2);

        // The next comment continues the counter used by the seed
        let comment = service.add_comment("2", "u1", "fits well").await.unwrap();
        assert_eq!(comment.id().value(), 3);
    }

    #[tokio::test]
    async fn test_duplicate_ids_conflict() {
        let seed = SeedData::from_json(
            r#"{ "users": [{ "username": "u1" }, { "username": "u1" }] }"#,
        )
        .unwrap();

        let result = seed.apply(&service()).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_comment_on_unknown_commodity_fails() {
        let seed = SeedData::from_json(
            r#"{
                "users": [{ "username": "u1" }],
                "comments": [{ "username": "u1", "commodity_id": "9", "text": "hm" }]
            }"#,
        )
        .unwrap();

        let result = seed.apply(&service()).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_out_of_range_seed_rating() {
        let seed = SeedData::from_json(
            r#"{ "commodities": [{ "id": "1", "name": "Tea", "provider": "P",
                 "category": "food", "price": 1,
                 "ratings": [{ "username": "u1", "score": 9 }] }] }"#,
        )
        .unwrap();

        let result = seed.apply(&service()).await;
        assert_eq!(result.unwrap_err(), DomainError::invalid_rating(9));
    }
}
