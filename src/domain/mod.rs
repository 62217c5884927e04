//! Domain layer - Core business logic and entities

pub mod comment;
pub mod commodity;
pub mod error;
pub mod similarity;
pub mod storage;
pub mod store;
pub mod user;

pub use comment::{Comment, CommentId, Reaction};
pub use commodity::{Commodity, CommodityFilter, CommodityId, SearchOption, UserRating};
pub use error::DomainError;
pub use similarity::{rank_similar, AttributeMatchScorer, ScoredCommodity, SimilarityScorer};
pub use storage::{Mutation, Storage, StorageEntity, StorageKey};
pub use store::{EntityKind, EntityStore};
pub use user::{User, UserId};
