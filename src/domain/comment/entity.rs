//! Comment entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::commodity::CommodityId;
use crate::domain::storage::StorageEntity;
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Maximum comment body length in characters
pub const MAX_COMMENT_LENGTH: usize = 2000;

/// Comment identifier, assigned in increasing order as comments are created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(u64);

impl CommentId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::str::FromStr for CommentId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| DomainError::invalid_format(format!("'{}' is not a valid comment id", s)))
    }
}

impl std::fmt::Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reaction a caller can leave on a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reaction {
    Like,
    Dislike,
}

impl std::fmt::Display for Reaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Like => write!(f, "like"),
            Self::Dislike => write!(f, "dislike"),
        }
    }
}

/// A user's comment on a commodity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    username: UserId,
    commodity_id: CommodityId,
    text: String,
    date: DateTime<Utc>,
    likes: u64,
    dislikes: u64,
}

impl Comment {
    /// Create a comment with zero reactions. The text must not be blank.
    pub fn new(
        id: CommentId,
        username: UserId,
        commodity_id: CommodityId,
        text: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let text = text.into();

        if text.trim().is_empty() {
            return Err(DomainError::validation("Comment text cannot be empty"));
        }

        if text.chars().count() > MAX_COMMENT_LENGTH {
            return Err(DomainError::validation(format!(
                "Comment text cannot exceed {} characters",
                MAX_COMMENT_LENGTH
            )));
        }

        Ok(Self {
            id,
            username,
            commodity_id,
            text,
            date: Utc::now(),
            likes: 0,
            dislikes: 0,
        })
    }

    // Getters

    pub fn id(&self) -> CommentId {
        self.id
    }

    pub fn username(&self) -> &UserId {
        &self.username
    }

    pub fn commodity_id(&self) -> &CommodityId {
        &self.commodity_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn likes(&self) -> u64 {
        self.likes
    }

    pub fn dislikes(&self) -> u64 {
        self.dislikes
    }

    // Mutators

    /// Increment the counter for `reaction` by one; the other counter is untouched
    pub fn react(&mut self, reaction: Reaction) {
        match reaction {
            Reaction::Like => self.likes = self.likes.saturating_add(1),
            Reaction::Dislike => self.dislikes = self.dislikes.saturating_add(1),
        }
    }
}

impl StorageEntity for Comment {
    type Key = CommentId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}
