//! Storage trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

use super::entity::StorageEntity;

/// In-place change applied to a stored entity while the store holds its write lock
pub type Mutation<E> = Box<dyn FnOnce(&mut E) -> Result<(), DomainError> + Send>;

/// Keyed store for one entity kind.
///
/// Listing returns entities in insertion order. There is no delete: records
/// are created once and afterwards only changed through [`Storage::modify`],
/// which runs the mutation atomically with respect to other writers.
#[async_trait]
pub trait Storage<E>: Send + Sync + Debug
where
    E: StorageEntity + 'static,
{
    /// Retrieves an entity by its key
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError>;

    /// Retrieves all entities in insertion order
    async fn list(&self) -> Result<Vec<E>, DomainError>;

    /// Creates a new entity, returns error if already exists
    async fn create(&self, entity: E) -> Result<E, DomainError>;

    /// Applies `mutation` to the entity under `key` and returns the updated copy.
    ///
    /// Returns `Ok(None)` when the key is absent. If the mutation fails the
    /// stored entity is left untouched.
    async fn modify(&self, key: &E::Key, mutation: Mutation<E>) -> Result<Option<E>, DomainError>;

    /// Checks if an entity exists by its key
    async fn exists(&self, key: &E::Key) -> Result<bool, DomainError> {
        Ok(self.get(key).await?.is_some())
    }

    /// Returns the count of entities
    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.list().await?.len())
    }
}
