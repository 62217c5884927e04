//! Comment reaction endpoints

use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::Comment;

pub const COMMENT_LIKED: &str = "The comment was successfully liked!";
pub const COMMENT_DISLIKED: &str = "The comment was successfully disliked!";

/// Request to like or dislike a comment
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReactionRequest {
    #[validate(length(min = 1))]
    pub username: String,
}

/// Comment response with its reaction counts
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: u64,
    pub username: String,
    pub commodity_id: String,
    pub text: String,
    pub date: String,
    pub likes: u64,
    pub dislikes: u64,
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id().value(),
            username: comment.username().to_string(),
            commodity_id: comment.commodity_id().to_string(),
            text: comment.text().to_string(),
            date: comment.date().to_rfc3339(),
            likes: comment.likes(),
            dislikes: comment.dislikes(),
        }
    }
}

/// POST /comments/{id}/like
pub async fn like_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ReactionRequest>,
) -> Result<&'static str, ApiError> {
    debug!(comment_id = %id, username = %request.username, "Liking comment");
    request.validate()?;

    state.marketplace.like_comment(&id, &request.username).await?;
    Ok(COMMENT_LIKED)
}

/// POST /comments/{id}/dislike
pub async fn dislike_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ReactionRequest>,
) -> Result<&'static str, ApiError> {
    debug!(comment_id = %id, username = %request.username, "Disliking comment");
    request.validate()?;

    state
        .marketplace
        .dislike_comment(&id, &request.username)
        .await?;
    Ok(COMMENT_DISLIKED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CommentId, CommodityId, Reaction, UserId};

    #[test]
    fn test_reaction_request_validation() {
        let request: ReactionRequest = serde_json::from_str(r#"{"username": ""}"#).unwrap();
        assert!(request.validate().is_err());

        assert!(serde_json::from_str::<ReactionRequest>("{}").is_err());
    }

    #[test]
    fn test_comment_response_from() {
        let mut comment = Comment::new(
            CommentId::new(7),
            UserId::new("u1").unwrap(),
            CommodityId::new("1").unwrap(),
            "solid",
        )
        .unwrap();
        comment.react(Reaction::Like);
        comment.react(Reaction::Dislike);
        comment.react(Reaction::Like);

        let response = CommentResponse::from(&comment);
        assert_eq!(response.id, 7);
        assert_eq!(response.username, "u1");
        assert_eq!((response.likes, response.dislikes), (2, 1));
    }
}
