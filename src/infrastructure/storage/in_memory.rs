//! In-memory storage implementation

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::storage::{Mutation, Storage, StorageEntity};
use crate::domain::DomainError;

/// Entities in insertion order plus a key index into that order
#[derive(Debug)]
struct Entries<E: StorageEntity> {
    items: Vec<E>,
    index: HashMap<E::Key, usize>,
}

impl<E: StorageEntity> Default for Entries<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<E: StorageEntity> Entries<E> {
    fn insert(&mut self, entity: E) -> Result<(), DomainError> {
        if self.index.contains_key(entity.key()) {
            return Err(DomainError::conflict(format!(
                "Entity with key '{}' already exists",
                entity.key()
            )));
        }

        self.index.insert(entity.key().clone(), self.items.len());
        self.items.push(entity);
        Ok(())
    }

    fn get(&self, key: &E::Key) -> Option<&E> {
        self.index.get(key).and_then(|&position| self.items.get(position))
    }

    fn get_mut(&mut self, key: &E::Key) -> Option<&mut E> {
        let position = *self.index.get(key)?;
        self.items.get_mut(position)
    }
}

/// Thread-safe in-memory storage implementation
///
/// A single `RwLock` guards each store: reads run concurrently, writes are
/// serialized. Data is lost when the process terminates.
#[derive(Debug)]
pub struct InMemoryStorage<E>
where
    E: StorageEntity,
{
    entries: RwLock<Entries<E>>,
}

impl<E> Default for InMemoryStorage<E>
where
    E: StorageEntity,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryStorage<E>
where
    E: StorageEntity,
{
    /// Creates a new empty in-memory storage
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Entries::default()),
        }
    }

    /// Creates storage pre-populated with entities, failing on duplicate keys
    pub fn with_entities(entities: Vec<E>) -> Result<Self, DomainError> {
        let mut entries = Entries::default();

        for entity in entities {
            entries.insert(entity)?;
        }

        Ok(Self {
            entries: RwLock::new(entries),
        })
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Entries<E>>, DomainError> {
        self.entries
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Entries<E>>, DomainError> {
        self.entries
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))
    }
}

#[async_trait]
impl<E> Storage<E> for InMemoryStorage<E>
where
    E: StorageEntity + 'static,
{
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError> {
        Ok(self.read()?.get(key).cloned())
    }

    async fn list(&self) -> Result<Vec<E>, DomainError> {
        Ok(self.read()?.items.clone())
    }

    async fn create(&self, entity: E) -> Result<E, DomainError> {
        let mut entries = self.write()?;
        entries.insert(entity.clone())?;
        Ok(entity)
    }

    async fn modify(&self, key: &E::Key, mutation: Mutation<E>) -> Result<Option<E>, DomainError> {
        let mut entries = self.write()?;

        let Some(current) = entries.get_mut(key) else {
            return Ok(None);
        };

        // Mutate a copy so a failed mutation leaves the stored entity as it was
        let mut updated = current.clone();
        mutation(&mut updated)?;
        *current = updated.clone();

        Ok(Some(updated))
    }

    async fn exists(&self, key: &E::Key) -> Result<bool, DomainError> {
        Ok(self.read()?.index.contains_key(key))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.read()?.items.len())
    }
}
