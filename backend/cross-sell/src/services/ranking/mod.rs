//! Ranking Module
//!
//! Orders catalog products by relevance to a recommendation request.
//!
//! # Workflow
//! 1. Drop the excluded product (the caller's own app)
//! 2. Score every remaining product (category, tags, novelty, rating)
//! 3. Stable sort by descending score, ties keep catalog order
//! 4. Truncate to `max_items`
//!
//! Ranking is pure: it reads the catalog, never mutates it, and never fails.

pub mod scorer;
pub mod simple;

pub use scorer::{score, ScoreWeights};
pub use simple::{rank, rank_scored, ScoreRanker};

use crate::models::{Product, RecommendationRequest, ScoredCandidate};

/// Strategy seam for recommendation ordering.
pub trait Ranker: Send + Sync {
    /// Score and order `products`, returning at most `request.max_items` entries.
    fn rank_scored<'a>(
        &self,
        products: &'a [Product],
        request: &RecommendationRequest,
    ) -> Vec<ScoredCandidate<'a>>;

    fn rank<'a>(&self, products: &'a [Product], request: &RecommendationRequest) -> Vec<&'a Product> {
        self.rank_scored(products, request)
            .into_iter()
            .map(|candidate| candidate.product)
            .collect()
    }
}
