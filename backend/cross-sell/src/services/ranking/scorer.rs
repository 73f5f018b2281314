//! Candidate Scoring
//!
//! Integer relevance weights for a single product against a single request.

use crate::models::{Product, RecommendationRequest};

/// Points awarded by each scoring rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Exact, case-sensitive category match
    pub category_match: u32,
    /// Per requested tag the product carries
    pub tag_match: u32,
    pub is_new: u32,
    /// Awarded when `rating >= top_rating_threshold`
    pub top_rated: u32,
    pub top_rating_threshold: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            category_match: 3,
            tag_match: 2,
            is_new: 1,
            top_rated: 1,
            top_rating_threshold: 4.8,
        }
    }
}

impl ScoreWeights {
    pub fn score(&self, product: &Product, request: &RecommendationRequest) -> u32 {
        let mut score = 0;

        if request.category.as_deref() == Some(product.category.as_str()) {
            score += self.category_match;
        }

        // Each occurrence counts, so a tag requested twice scores twice.
        for tag in &request.tags {
            if product.has_tag(tag) {
                score += self.tag_match;
            }
        }

        if product.is_new() {
            score += self.is_new;
        }

        if product
            .rating
            .is_some_and(|rating| rating >= self.top_rating_threshold)
        {
            score += self.top_rated;
        }

        score
    }
}

/// Score with the default weights.
pub fn score(product: &Product, request: &RecommendationRequest) -> u32 {
    ScoreWeights::default().score(product, request)
}
