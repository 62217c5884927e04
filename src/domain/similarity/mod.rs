//! Similarity domain - content-based relatedness between commodities

mod scorer;

pub use scorer::{
    rank_similar, AttributeMatchScorer, ScoredCommodity, SimilarityScorer,
    DEFAULT_CATEGORY_WEIGHT, DEFAULT_PROVIDER_WEIGHT, DEFAULT_SUGGESTION_LIMIT,
};
