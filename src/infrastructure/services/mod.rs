//! Infrastructure services

mod aggregation_service;
mod comment_service;
mod marketplace_service;
mod suggestion_service;

pub use aggregation_service::AggregationService;
pub use comment_service::{CommentService, CreateCommentRequest};
pub use marketplace_service::MarketplaceService;
pub use suggestion_service::SuggestionService;
