//! Storage factory

use std::sync::Arc;

use crate::domain::storage::{Storage, StorageEntity};
use crate::domain::{Comment, Commodity, EntityStore, User};

use super::in_memory::InMemoryStorage;

/// Factory for creating storage instances
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Creates an empty in-memory storage for one entity kind
    pub fn in_memory<E>() -> Arc<dyn Storage<E>>
    where
        E: StorageEntity + 'static,
    {
        Arc::new(InMemoryStorage::<E>::new())
    }

    /// Creates an entity store backed by empty in-memory collections
    pub fn in_memory_entity_store() -> EntityStore {
        EntityStore::new(
            Self::in_memory::<User>(),
            Self::in_memory::<Commodity>(),
            Self::in_memory::<Comment>(),
        )
    }
}
