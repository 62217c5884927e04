//! Entity store - one keyed collection per entity kind
//!
//! Every service receives the store explicitly; there is no global state.
//! Lookups fail with `NotFound` when a record is absent and listings come
//! back in insertion order.

use std::fmt::Display;
use std::sync::Arc;

use super::comment::{Comment, CommentId};
use super::commodity::{Commodity, CommodityId};
use super::storage::{Mutation, Storage};
use super::user::{User, UserId};
use super::DomainError;

/// Kind of record held by the store, used in error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Commodity,
    Comment,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "User"),
            Self::Commodity => write!(f, "Commodity"),
            Self::Comment => write!(f, "Comment"),
        }
    }
}

/// Build the `NotFound` error for a missing record
pub fn not_found(kind: EntityKind, id: impl Display) -> DomainError {
    DomainError::not_found(format!("{} '{}' not found", kind, id))
}

fn required<E>(found: Option<E>, kind: EntityKind, id: impl Display) -> Result<E, DomainError> {
    found.ok_or_else(|| not_found(kind, id))
}

/// Shared handle to the user, commodity and comment collections
#[derive(Debug, Clone)]
pub struct EntityStore {
    users: Arc<dyn Storage<User>>,
    commodities: Arc<dyn Storage<Commodity>>,
    comments: Arc<dyn Storage<Comment>>,
}

impl EntityStore {
    pub fn new(
        users: Arc<dyn Storage<User>>,
        commodities: Arc<dyn Storage<Commodity>>,
        comments: Arc<dyn Storage<Comment>>,
    ) -> Self {
        Self {
            users,
            commodities,
            comments,
        }
    }

    // Users

    pub async fn user(&self, id: &UserId) -> Result<User, DomainError> {
        required(self.users.get(id).await?, EntityKind::User, id)
    }

    pub async fn users(&self) -> Result<Vec<User>, DomainError> {
        self.users.list().await
    }

    pub async fn user_exists(&self, id: &UserId) -> Result<bool, DomainError> {
        self.users.exists(id).await
    }

    pub async fn insert_user(&self, user: User) -> Result<User, DomainError> {
        self.users.create(user).await
    }

    pub async fn modify_user(&self, id: &UserId, mutation: Mutation<User>) -> Result<User, DomainError> {
        required(self.users.modify(id, mutation).await?, EntityKind::User, id)
    }

    // Commodities

    pub async fn commodity(&self, id: &CommodityId) -> Result<Commodity, DomainError> {
        required(self.commodities.get(id).await?, EntityKind::Commodity, id)
    }

    pub async fn commodities(&self) -> Result<Vec<Commodity>, DomainError> {
        self.commodities.list().await
    }

    pub async fn commodity_exists(&self, id: &CommodityId) -> Result<bool, DomainError> {
        self.commodities.exists(id).await
    }

    pub async fn insert_commodity(&self, commodity: Commodity) -> Result<Commodity, DomainError> {
        self.commodities.create(commodity).await
    }

    pub async fn modify_commodity(
        &self,
        id: &CommodityId,
        mutation: Mutation<Commodity>,
    ) -> Result<Commodity, DomainError> {
        required(
            self.commodities.modify(id, mutation).await?,
            EntityKind::Commodity,
            id,
        )
    }

    // Comments

    pub async fn comment(&self, id: CommentId) -> Result<Comment, DomainError> {
        required(self.comments.get(&id).await?, EntityKind::Comment, id)
    }

    pub async fn comments(&self) -> Result<Vec<Comment>, DomainError> {
        self.comments.list().await
    }

    pub async fn insert_comment(&self, comment: Comment) -> Result<Comment, DomainError> {
        self.comments.create(comment).await
    }

    pub async fn modify_comment(
        &self,
        id: CommentId,
        mutation: Mutation<Comment>,
    ) -> Result<Comment, DomainError> {
        required(self.comments.modify(&id, mutation).await?, EntityKind::Comment, id)
    }

    /// Record counts as (users, commodities, comments)
    pub async fn counts(&self) -> Result<(usize, usize, usize), DomainError> {
        Ok((
            self.users.count().await?,
            self.commodities.count().await?,
            self.comments.count().await?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::StorageFactory;

    fn user(name: &str) -> User {
        User::new(UserId::new(name).unwrap(), format!("{}@example.com", name), "Tehran")
    }

    fn commodity(id: &str) -> Commodity {
        Commodity::new(CommodityId::new(id).unwrap(), "Tea", "Golestan", "food", 3.0).unwrap()
    }

    #[tokio::test]
    async fn test_lookup_missing_is_not_found() {
        let store = StorageFactory::in_memory_entity_store();

        let err = store.user(&UserId::new("ghost").unwrap()).await.unwrap_err();
        assert_eq!(err, DomainError::not_found("User 'ghost' not found"));

        let err = store
            .commodity(&CommodityId::new("9").unwrap())
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::not_found("Commodity '9' not found"));

        let err = store.comment(CommentId::new(3)).await.unwrap_err();
        assert_eq!(err, DomainError::not_found("Comment '3' not found"));
    }

    #[tokio::test]
    async fn test_listing_in_insertion_order() {
        let store = StorageFactory::in_memory_entity_store();

        for id in ["3", "1", "2"] {
            store.insert_commodity(commodity(id)).await.unwrap();
        }

        let ids: Vec<String> = store
            .commodities()
            .await
            .unwrap()
            .iter()
            .map(|c| c.id().to_string())
            .collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[tokio::test]
    async fn test_modify_missing_user_is_not_found() {
        let store = StorageFactory::in_memory_entity_store();

        let result = store
            .modify_user(&UserId::new("ghost").unwrap(), Box::new(|_: &mut User| Ok(())))
            .await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_counts() {
        let store = StorageFactory::in_memory_entity_store();
        store.insert_user(user("ali")).await.unwrap();
        store.insert_commodity(commodity("1")).await.unwrap();

        assert_eq!(store.counts().await.unwrap(), (1, 1, 0));
        assert!(store.user_exists(&UserId::new("ali").unwrap()).await.unwrap());
        assert!(!store
            .commodity_exists(&CommodityId::new("2").unwrap())
            .await
            .unwrap());
    }
}
