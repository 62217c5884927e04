//! Suggestion service - "similar commodities" for a given commodity

use std::sync::Arc;

use tracing::debug;

use crate::domain::commodity::{Commodity, CommodityId};
use crate::domain::similarity::{
    rank_similar, AttributeMatchScorer, ScoredCommodity, SimilarityScorer,
    DEFAULT_SUGGESTION_LIMIT,
};
use crate::domain::{DomainError, EntityStore};

/// Scans the catalog and returns the commodities most related to a source
#[derive(Debug, Clone)]
pub struct SuggestionService {
    store: EntityStore,
    scorer: Arc<dyn SimilarityScorer>,
    limit: usize,
}

impl SuggestionService {
    /// Create a service using the attribute-match scorer and default limit
    pub fn new(store: EntityStore) -> Self {
        Self {
            store,
            scorer: Arc::new(AttributeMatchScorer::default()),
            limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    /// Set a different scorer (builder pattern)
    pub fn with_scorer(mut self, scorer: Arc<dyn SimilarityScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Set the maximum number of suggestions (builder pattern)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Commodities similar to `commodity_id`, best match first
    pub async fn suggest(&self, commodity_id: &CommodityId) -> Result<Vec<Commodity>, DomainError> {
        Ok(self
            .suggest_scored(commodity_id)
            .await?
            .into_iter()
            .map(|scored| scored.commodity)
            .collect())
    }

    /// Same as [`Self::suggest`] but keeps each suggestion's score
    pub async fn suggest_scored(
        &self,
        commodity_id: &CommodityId,
    ) -> Result<Vec<ScoredCommodity>, DomainError> {
        let source = self.store.commodity(commodity_id).await?;
        let candidates = self.store.commodities().await?;
        let candidate_count = candidates.len();

        let ranked = rank_similar(self.scorer.as_ref(), &source, candidates, self.limit);

        debug!(
            commodity_id = %commodity_id,
            scorer = self.scorer.scorer_name(),
            candidates = candidate_count,
            suggestions = ranked.len(),
            "Ranked similar commodities"
        );

        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::StorageFactory;

    async fn create_service(catalog: &[(&str, &str, &str)]) -> SuggestionService {
        let store = StorageFactory::in_memory_entity_store();

        for (id, provider, category) in catalog {
            let commodity = Commodity::new(
                CommodityId::new(*id).unwrap(),
                format!("item {}", id),
                *provider,
                *category,
                10.0,
            )
            .unwrap();
            store.insert_commodity(commodity).await.unwrap();
        }

        SuggestionService::new(store)
    }

    fn ids(commodities: &[Commodity]) -> Vec<&str> {
        commodities.iter().map(|c| c.id().as_str()).collect()
    }

    fn id(value: &str) -> CommodityId {
        CommodityId::new(value).unwrap()
    }

    #[tokio::test]
    async fn test_suggest_unknown_commodity() {
        let service = create_service(&[("1", "Samsung", "electronics")]).await;

        let result = service.suggest(&id("2")).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_suggest_orders_by_score_then_insertion() {
        let service = create_service(&[
            ("1", "Samsung", "electronics"),
            ("2", "Samsung", "home"),
            ("3", "Apple", "electronics"),
            ("4", "Samsung", "electronics"),
            ("5", "Zara", "clothing"),
            ("6", "LG", "electronics"),
        ])
        .await;

        let suggested = service.suggest(&id("1")).await.unwrap();
        assert_eq!(ids(&suggested), vec!["4", "3", "6"]);
    }

    #[tokio::test]
    async fn test_suggest_never_includes_source_and_respects_limit() {
        let service = create_service(&[
            ("1", "Samsung", "electronics"),
            ("2", "Samsung", "electronics"),
            ("3", "Samsung", "electronics"),
            ("4", "Samsung", "electronics"),
            ("5", "Samsung", "electronics"),
        ])
        .await;

        let suggested = service.suggest(&id("3")).await.unwrap();
        assert_eq!(suggested.len(), 3);
        assert!(suggested.iter().all(|c| c.id().as_str() != "3"));
        assert_eq!(ids(&suggested), vec!["1", "2", "4"]);
    }

    #[tokio::test]
    async fn test_suggest_returns_fewer_when_few_match() {
        let service = create_service(&[
            ("1", "Samsung", "electronics"),
            ("2", "Zara", "clothing"),
            ("3", "Samsung", "home"),
        ])
        .await;

        let suggested = service.suggest(&id("1")).await.unwrap();
        assert_eq!(ids(&suggested), vec!["3"]);
    }

    #[tokio::test]
    async fn test_suggest_only_commodity_is_empty() {
        let service = create_service(&[("1", "Samsung", "electronics")]).await;
        assert!(service.suggest(&id("1")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_custom_limit() {
        let service = create_service(&[
            ("1", "Samsung", "electronics"),
            ("2", "Samsung", "electronics"),
            ("3", "Apple", "electronics"),
        ])
        .await
        .with_limit(1);

        assert_eq!(service.limit(), 1);
        let scored = service.suggest_scored(&id("1")).await.unwrap();
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].commodity.id().as_str(), "2");
        assert_eq!(scored[0].score, 3);
    }

    #[tokio::test]
    async fn test_custom_scorer() {
        let service = create_service(&[
            ("1", "Samsung", "electronics"),
            ("2", "Apple", "electronics"),
            ("3", "Samsung", "home"),
        ])
        .await
        .with_scorer(Arc::new(AttributeMatchScorer::new(0, 1)));

        let suggested = service.suggest(&id("1")).await.unwrap();
        assert_eq!(ids(&suggested), vec!["3"]);
    }
}
