//! Application state for shared services

use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use crate::domain::{Comment, Commodity, DomainError, SearchOption, User};
use crate::infrastructure::services::MarketplaceService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub marketplace: Arc<dyn MarketplaceServiceTrait>,
}

impl AppState {
    pub fn new(marketplace: Arc<dyn MarketplaceServiceTrait>) -> Self {
        Self { marketplace }
    }
}

/// Business operations the request layer calls. Identifiers and numeric
/// inputs are passed through as received.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait MarketplaceServiceTrait: Send + Sync {
    async fn list_commodities(&self) -> Result<Vec<Commodity>, DomainError>;
    async fn get_commodity(&self, id: &str) -> Result<Commodity, DomainError>;
    async fn search(&self, option: SearchOption, value: &str)
        -> Result<Vec<Commodity>, DomainError>;
    async fn suggest(&self, id: &str) -> Result<Vec<Commodity>, DomainError>;
    async fn rate(
        &self,
        commodity_id: &str,
        username: &str,
        raw_rate: &str,
    ) -> Result<Commodity, DomainError>;
    async fn add_comment(
        &self,
        commodity_id: &str,
        username: &str,
        body: &str,
    ) -> Result<Comment, DomainError>;
    async fn list_comments(&self, commodity_id: &str) -> Result<Vec<Comment>, DomainError>;
    async fn like_comment(&self, comment_id: &str, username: &str) -> Result<Comment, DomainError>;
    async fn dislike_comment(
        &self,
        comment_id: &str,
        username: &str,
    ) -> Result<Comment, DomainError>;
    async fn get_user(&self, id: &str) -> Result<User, DomainError>;
    async fn adjust_credit(&self, user_id: &str, raw_amount: &str) -> Result<f64, DomainError>;
}

#[async_trait::async_trait]
impl MarketplaceServiceTrait for MarketplaceService {
    async fn list_commodities(&self) -> Result<Vec<Commodity>, DomainError> {
        MarketplaceService::list_commodities(self).await
    }

    async fn get_commodity(&self, id: &str) -> Result<Commodity, DomainError> {
        MarketplaceService::get_commodity(self, id).await
    }

    async fn search(
        &self,
        option: SearchOption,
        value: &str,
    ) -> Result<Vec<Commodity>, DomainError> {
        MarketplaceService::search(self, option, value).await
    }

    async fn suggest(&self, id: &str) -> Result<Vec<Commodity>, DomainError> {
        MarketplaceService::suggest(self, id).await
    }

    async fn rate(
        &self,
        commodity_id: &str,
        username: &str,
        raw_rate: &str,
    ) -> Result<Commodity, DomainError> {
        MarketplaceService::rate(self, commodity_id, username, raw_rate).await
    }

    async fn add_comment(
        &self,
        commodity_id: &str,
        username: &str,
        body: &str,
    ) -> Result<Comment, DomainError> {
        MarketplaceService::add_comment(self, commodity_id, username, body).await
    }

    async fn list_comments(&self, commodity_id: &str) -> Result<Vec<Comment>, DomainError> {
        MarketplaceService::list_comments(self, commodity_id).await
    }

    async fn like_comment(&self, comment_id: &str, username: &str) -> Result<Comment, DomainError> {
        MarketplaceService::like_comment(self, comment_id, username).await
    }

    async fn dislike_comment(
        &self,
        comment_id: &str,
        username: &str,
    ) -> Result<Comment, DomainError> {
        MarketplaceService::dislike_comment(self, comment_id, username).await
    }

    async fn get_user(&self, id: &str) -> Result<User, DomainError> {
        MarketplaceService::get_user(self, id).await
    }

    async fn adjust_credit(&self, user_id: &str, raw_amount: &str) -> Result<f64, DomainError> {
        MarketplaceService::adjust_credit(self, user_id, raw_amount).await
    }
}
