//! Storage domain - Generic entity store abstraction

mod entity;
mod repository;

pub use entity::{StorageEntity, StorageKey};
pub use repository::{Mutation, Storage};
