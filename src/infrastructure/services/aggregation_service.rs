//! Aggregation service - ratings and comment reactions
//!
//! Averages are never cached: every read recomputes them from the stored
//! rating set, so a rating is visible to the next read without invalidation.

use tracing::{debug, info};

use crate::domain::commodity::{Commodity, CommodityId};
use crate::domain::comment::{Comment, CommentId, Reaction};
use crate::domain::user::UserId;
use crate::domain::{DomainError, EntityStore};

/// Records ratings and comment reactions as single atomic updates
#[derive(Debug, Clone)]
pub struct AggregationService {
    store: EntityStore,
}

impl AggregationService {
    pub fn new(store: EntityStore) -> Self {
        Self { store }
    }

    /// Record `score` from `username`, replacing any earlier rating by that user.
    ///
    /// Fails with `InvalidRating` outside 1..=5 and `NotFound` for an unknown
    /// commodity. The replacement happens under the commodity store's write
    /// lock, so concurrent raters never lose each other's updates.
    pub async fn record_rating(
        &self,
        commodity_id: &CommodityId,
        username: &UserId,
        score: u8,
    ) -> Result<Commodity, DomainError> {
        let rater = username.clone();

        let commodity = self
            .store
            .modify_commodity(
                commodity_id,
                Box::new(move |commodity: &mut Commodity| {
                    commodity.rate(rater, score).map(|_| ())
                }),
            )
            .await?;

        info!(
            commodity_id = %commodity_id,
            username = %username,
            score,
            rating_count = commodity.ratings().len(),
            "Recorded rating"
        );

        Ok(commodity)
    }

    /// Mean of the commodity's current ratings, `0.0` when it has none
    pub async fn average_rating(&self, commodity_id: &CommodityId) -> Result<f64, DomainError> {
        let commodity = self.store.commodity(commodity_id).await?;
        let average = commodity.average_rating();

        debug!(commodity_id = %commodity_id, average, "Computed average rating");
        Ok(average)
    }

    /// Increment the like counter of a comment by one
    pub async fn like(&self, comment_id: CommentId) -> Result<Comment, DomainError> {
        self.react(comment_id, Reaction::Like).await
    }

    /// Increment the dislike counter of a comment by one
    pub async fn dislike(&self, comment_id: CommentId) -> Result<Comment, DomainError> {
        self.react(comment_id, Reaction::Dislike).await
    }

    // The same caller may react any number of times; there is no per-user ledger.
    async fn react(&self, comment_id: CommentId, reaction: Reaction) -> Result<Comment, DomainError> {
        let comment = self
            .store
            .modify_comment(
                comment_id,
                Box::new(move |comment: &mut Comment| {
                    comment.react(reaction);
                    Ok(())
                }),
            )
            .await?;

        info!(
            comment_id = %comment_id,
            reaction = %reaction,
            likes = comment.likes(),
            dislikes = comment.dislikes(),
            "Recorded comment reaction"
        );

        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::StorageFactory;

    async fn create_service() -> (AggregationService, EntityStore) {
        let store = StorageFactory::in_memory_entity_store();

        store
            .insert_commodity(
                Commodity::new(CommodityId::new("1").unwrap(), "Phone", "Samsung", "electronics", 100.0)
                    .unwrap(),
            )
            .await
            .unwrap();

        store
            .insert_comment(
                Comment::new(
                    CommentId::new(1),
                    UserId::new("ali").unwrap(),
                    CommodityId::new("1").unwrap(),
                    "nice",
                )
                .unwrap(),
            )
            .await
            .unwrap();

        (AggregationService::new(store.clone()), store)
    }

    fn commodity_id() -> CommodityId {
        CommodityId::new("1").unwrap()
    }

    fn user(name: &str) -> UserId {
        UserId::new(name).unwrap()
    }

    #[tokio::test]
    async fn test_average_is_zero_without_ratings() {
        let (service, _) = create_service().await;
        assert_eq!(service.average_rating(&commodity_id()).await.unwrap(), 0.0);
    }

    #[tokio::test]
    async fn test_average_of_two_ratings_then_replacement() {
        let (service, _) = create_service().await;

        service.record_rating(&commodity_id(), &user("ali"), 4).await.unwrap();
        service.record_rating(&commodity_id(), &user("sara"), 5).await.unwrap();
        assert_eq!(service.average_rating(&commodity_id()).await.unwrap(), 4.5);

        service.record_rating(&commodity_id(), &user("ali"), 2).await.unwrap();
        assert_eq!(service.average_rating(&commodity_id()).await.unwrap(), 3.5);
    }

    #[tokio::test]
    async fn test_rating_unknown_commodity() {
        let (service, _) = create_service().await;

        let result = service
            .record_rating(&CommodityId::new("404").unwrap(), &user("ali"), 3)
            .await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));

        let result = service.average_rating(&CommodityId::new("404").unwrap()).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_rating_out_of_range() {
        let (service, store) = create_service().await;

        let result = service.record_rating(&commodity_id(), &user("ali"), 6).await;
        assert_eq!(result.unwrap_err(), DomainError::invalid_rating(6));

        let commodity = store.commodity(&commodity_id()).await.unwrap();
        assert!(commodity.ratings().is_empty());
    }

    #[tokio::test]
    async fn test_like_and_dislike_counts() {
        let (service, _) = create_service().await;
        let id = CommentId::new(1);

        let comment = service.like(id).await.unwrap();
        assert_eq!((comment.likes(), comment.dislikes()), (1, 0));

        let comment = service.like(id).await.unwrap();
        assert_eq!((comment.likes(), comment.dislikes()), (2, 0));

        let comment = service.dislike(id).await.unwrap();
        assert_eq!((comment.likes(), comment.dislikes()), (2, 1));
    }

    #[tokio::test]
    async fn test_reaction_on_unknown_comment() {
        let (service, _) = create_service().await;

        assert!(matches!(
            service.like(CommentId::new(99)).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            service.dislike(CommentId::new(99)).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_concurrent_likes_are_not_lost() {
        let (service, store) = create_service().await;

        let tasks: Vec<_> = (0..100)
            .map(|i| {
                let service = service.clone();
                tokio::spawn(async move {
                    if i % 4 == 0 {
                        service.dislike(CommentId::new(1)).await.unwrap();
                    } else {
                        service.like(CommentId::new(1)).await.unwrap();
                    }
                })
            })
            .collect();

        for result in futures::future::join_all(tasks).await {
            result.unwrap();
        }

        let comment = store.comment(CommentId::new(1)).await.unwrap();
        assert_eq!(comment.likes(), 75);
        assert_eq!(comment.dislikes(), 25);
    }

    #[tokio::test]
    async fn test_concurrent_raters_are_not_lost() {
        let (service, store) = create_service().await;

        let tasks: Vec<_> = (0..50)
            .map(|i| {
                let service = service.clone();
                tokio::spawn(async move {
                    let rater = UserId::new(format!("user{}", i)).unwrap();
                    service.record_rating(&commodity_id(), &rater, 4).await.unwrap();
                })
            })
            .collect();

        for result in futures::future::join_all(tasks).await {
            result.unwrap();
        }

        let commodity = store.commodity(&commodity_id()).await.unwrap();
        assert_eq!(commodity.ratings().len(), 50);
        assert_eq!(commodity.average_rating(), 4.0);
    }
}
