//! Marketplace service - the single entry point for business operations
//!
//! Accepts the raw strings the request layer extracted (path ids, numeric
//! fields) and turns them into typed values before touching the store.
//! Identifiers that cannot name a stored record are reported as `NotFound`.

use tracing::{debug, info};

use super::aggregation_service::AggregationService;
use super::comment_service::{CommentService, CreateCommentRequest};
use super::suggestion_service::SuggestionService;
use crate::domain::comment::{Comment, CommentId};
use crate::domain::commodity::{parse_rating, Commodity, CommodityFilter, CommodityId, SearchOption};
use crate::domain::store::{not_found, EntityKind};
use crate::domain::user::{parse_credit_amount, User, UserId};
use crate::domain::{DomainError, EntityStore};

fn parse_commodity_id(raw: &str) -> Result<CommodityId, DomainError> {
    CommodityId::new(raw).map_err(|_| not_found(EntityKind::Commodity, raw))
}

fn parse_user_id(raw: &str) -> Result<UserId, DomainError> {
    UserId::new(raw).map_err(|_| not_found(EntityKind::User, raw))
}

fn parse_comment_id(raw: &str) -> Result<CommentId, DomainError> {
    raw.parse::<CommentId>()
        .map_err(|_| not_found(EntityKind::Comment, raw))
}

/// Facade over the entity store, aggregation, comments and suggestions
#[derive(Debug, Clone)]
pub struct MarketplaceService {
    store: EntityStore,
    aggregation: AggregationService,
    comments: CommentService,
    suggestions: SuggestionService,
}

impl MarketplaceService {
    /// Create the service with default suggestion settings
    pub fn new(store: EntityStore) -> Self {
        Self {
            aggregation: AggregationService::new(store.clone()),
            comments: CommentService::new(store.clone()),
            suggestions: SuggestionService::new(store.clone()),
            store,
        }
    }

    /// Set the maximum number of suggestions (builder pattern)
    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestions = self.suggestions.with_limit(limit);
        self
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    // Commodities

    /// All commodities in insertion order
    pub async fn list_commodities(&self) -> Result<Vec<Commodity>, DomainError> {
        self.store.commodities().await
    }

    /// Get a commodity by ID
    pub async fn get_commodity(&self, id: &str) -> Result<Commodity, DomainError> {
        self.store.commodity(&parse_commodity_id(id)?).await
    }

    /// Commodities whose name contains `value`, ignoring case
    pub async fn filter_by_name(&self, value: &str) -> Result<Vec<Commodity>, DomainError> {
        self.search(SearchOption::Name, value).await
    }

    /// Commodities whose category equals `value` exactly
    pub async fn filter_by_category(&self, value: &str) -> Result<Vec<Commodity>, DomainError> {
        self.search(SearchOption::Category, value).await
    }

    /// Commodities whose provider equals `value` exactly
    pub async fn filter_by_provider(&self, value: &str) -> Result<Vec<Commodity>, DomainError> {
        self.search(SearchOption::Provider, value).await
    }

    /// Apply one search option; no match yields an empty list
    pub async fn search(
        &self,
        option: SearchOption,
        value: &str,
    ) -> Result<Vec<Commodity>, DomainError> {
        let filter = CommodityFilter::new(option, value);
        let matches = filter.apply(self.store.commodities().await?);

        debug!(option = %option, value = %value, matches = matches.len(), "Searched commodities");
        Ok(matches)
    }

    /// Commodities similar to `id`, best match first
    pub async fn suggest(&self, id: &str) -> Result<Vec<Commodity>, DomainError> {
        self.suggestions.suggest(&parse_commodity_id(id)?).await
    }

    // Ratings

    /// Rate a commodity on behalf of `username`.
    ///
    /// The raw rate is validated before the commodity is looked up, so a
    /// malformed value is `InvalidFormat` whether or not the commodity exists.
    pub async fn rate(
        &self,
        commodity_id: &str,
        username: &str,
        raw_rate: &str,
    ) -> Result<Commodity, DomainError> {
        let score = parse_rating(raw_rate)?;
        let commodity_id = parse_commodity_id(commodity_id)?;
        let username = UserId::new(username).map_err(|e| DomainError::validation(e.to_string()))?;

        self.aggregation
            .record_rating(&commodity_id, &username, score)
            .await
    }

    /// Average rating of a commodity, `0.0` when unrated
    pub async fn average_rating(&self, commodity_id: &str) -> Result<f64, DomainError> {
        self.aggregation
            .average_rating(&parse_commodity_id(commodity_id)?)
            .await
    }

    // Comments

    /// Post a comment; both the commodity and the author must exist
    pub async fn add_comment(
        &self,
        commodity_id: &str,
        username: &str,
        body: &str,
    ) -> Result<Comment, DomainError> {
        let username = parse_user_id(username)?;
        let commodity_id = parse_commodity_id(commodity_id)?;

        self.comments
            .create(CreateCommentRequest {
                username,
                commodity_id,
                text: body.to_string(),
            })
            .await
    }

    /// Comments on a commodity, oldest first
    pub async fn list_comments(&self, commodity_id: &str) -> Result<Vec<Comment>, DomainError> {
        match CommodityId::new(commodity_id) {
            Ok(id) => self.comments.list_for_commodity(&id).await,
            Err(_) => Ok(Vec::new()),
        }
    }

    /// Get a comment by ID
    pub async fn get_comment(&self, id: &str) -> Result<Comment, DomainError> {
        self.comments.get(parse_comment_id(id)?).await
    }

    /// Like a comment. `username` is recorded in the log only.
    pub async fn like_comment(&self, comment_id: &str, username: &str) -> Result<Comment, DomainError> {
        debug!(comment_id = %comment_id, username = %username, "Liking comment");
        self.aggregation.like(parse_comment_id(comment_id)?).await
    }

    /// Dislike a comment. `username` is recorded in the log only.
    pub async fn dislike_comment(
        &self,
        comment_id: &str,
        username: &str,
    ) -> Result<Comment, DomainError> {
        debug!(comment_id = %comment_id, username = %username, "Disliking comment");
        self.aggregation.dislike(parse_comment_id(comment_id)?).await
    }

    // Users

    /// Get a user by username
    pub async fn get_user(&self, id: &str) -> Result<User, DomainError> {
        self.store.user(&parse_user_id(id)?).await
    }

    /// Add a raw credit amount to a user's balance and return the new balance.
    ///
    /// The amount is parsed and range-checked before the user is looked up.
    pub async fn adjust_credit(&self, user_id: &str, raw_amount: &str) -> Result<f64, DomainError> {
        let amount_micros = parse_credit_amount(raw_amount)?;
        let user_id = parse_user_id(user_id)?;

        let user = self
            .store
            .modify_user(
                &user_id,
                Box::new(move |user: &mut User| user.add_credit(amount_micros)),
            )
            .await?;

        info!(
            username = %user_id,
            amount_micros,
            balance = user.credit(),
            "Added credit"
        );

        Ok(user.credit())
    }
}
