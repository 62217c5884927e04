//! Similarity scoring trait, the attribute-match scorer and ranking

use std::fmt::Debug;

use serde::Serialize;

use crate::domain::commodity::Commodity;

/// Weight of a shared category, the primary signal
pub const DEFAULT_CATEGORY_WEIGHT: u32 = 2;

/// Weight of a shared provider, the secondary signal
pub const DEFAULT_PROVIDER_WEIGHT: u32 = 1;

/// Number of suggestions returned when not configured otherwise
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

/// Scores how related a candidate commodity is to a source commodity.
///
/// A score of zero means unrelated; such candidates are never suggested.
pub trait SimilarityScorer: Send + Sync + Debug {
    /// Score `candidate` against `source`
    fn score(&self, source: &Commodity, candidate: &Commodity) -> u32;

    /// Get the scorer name for logging
    fn scorer_name(&self) -> &'static str;
}

/// Weighted match on category equality and provider equality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeMatchScorer {
    category_weight: u32,
    provider_weight: u32,
}

impl Default for AttributeMatchScorer {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORY_WEIGHT, DEFAULT_PROVIDER_WEIGHT)
    }
}

impl AttributeMatchScorer {
    pub fn new(category_weight: u32, provider_weight: u32) -> Self {
        Self {
            category_weight,
            provider_weight,
        }
    }
}

impl SimilarityScorer for AttributeMatchScorer {
    fn score(&self, source: &Commodity, candidate: &Commodity) -> u32 {
        let mut score = 0;

        if source.category() == candidate.category() {
            score += self.category_weight;
        }

        if source.provider() == candidate.provider() {
            score += self.provider_weight;
        }

        score
    }

    fn scorer_name(&self) -> &'static str {
        "attribute_match"
    }
}

/// A commodity together with its similarity score
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCommodity {
    pub commodity: Commodity,
    pub score: u32,
}

/// Rank `candidates` by similarity to `source`.
///
/// The source itself and zero-score candidates are dropped. The rest are
/// ordered by descending score; equal scores keep the order of `candidates`.
/// At most `limit` entries are returned.
pub fn rank_similar(
    scorer: &dyn SimilarityScorer,
    source: &Commodity,
    candidates: Vec<Commodity>,
    limit: usize,
) -> Vec<ScoredCommodity> {
    let mut scored: Vec<ScoredCommodity> = candidates
        .into_iter()
        .filter(|candidate| candidate.id() != source.id())
        .filter_map(|candidate| {
            let score = scorer.score(source, &candidate);
            (score > 0).then_some(ScoredCommodity {
                commodity: candidate,
                score,
            })
        })
        .collect();

    // sort_by is stable, so ties stay in insertion order
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}
