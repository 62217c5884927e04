//! Comment service - creation and lookup of comments

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::info;

use crate::domain::comment::{Comment, CommentId};
use crate::domain::commodity::CommodityId;
use crate::domain::store::{not_found, EntityKind};
use crate::domain::user::UserId;
use crate::domain::{DomainError, EntityStore};

/// Request for posting a new comment
#[derive(Debug, Clone)]
pub struct CreateCommentRequest {
    pub username: UserId,
    pub commodity_id: CommodityId,
    pub text: String,
}

/// Creates comments with fresh, increasing identifiers
#[derive(Debug, Clone)]
pub struct CommentService {
    store: EntityStore,
    next_id: Arc<AtomicU64>,
}

impl CommentService {
    /// Create a service whose first comment receives id 1
    pub fn new(store: EntityStore) -> Self {
        Self::starting_at(store, 1)
    }

    /// Create a service whose first comment receives `first_id`
    pub fn starting_at(store: EntityStore, first_id: u64) -> Self {
        Self {
            store,
            next_id: Arc::new(AtomicU64::new(first_id)),
        }
    }

    /// Create and store a comment.
    ///
    /// The author and the target commodity must exist at creation time; the
    /// author is checked first.
    pub async fn create(&self, request: CreateCommentRequest) -> Result<Comment, DomainError> {
        if !self.store.user_exists(&request.username).await? {
            return Err(not_found(EntityKind::User, &request.username));
        }

        if !self.store.commodity_exists(&request.commodity_id).await? {
            return Err(not_found(EntityKind::Commodity, &request.commodity_id));
        }

        let id = CommentId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let comment = Comment::new(id, request.username, request.commodity_id, request.text)?;
        let comment = self.store.insert_comment(comment).await?;

        info!(
            comment_id = %comment.id(),
            username = %comment.username(),
            commodity_id = %comment.commodity_id(),
            "Created comment"
        );

        Ok(comment)
    }

    /// Get a comment by ID
    pub async fn get(&self, id: CommentId) -> Result<Comment, DomainError> {
        self.store.comment(id).await
    }

    /// Comments on a commodity, oldest first. Unknown commodities have none.
    pub async fn list_for_commodity(
        &self,
        commodity_id: &CommodityId,
    ) -> Result<Vec<Comment>, DomainError> {
        let comments = self.store.comments().await?;

        Ok(comments
            .into_iter()
            .filter(|c| c.commodity_id() == commodity_id)
            .collect())
    }
}
