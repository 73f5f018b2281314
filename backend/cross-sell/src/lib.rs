//! Cross-sell recommendations
//!
//! Ranks the suite's product catalog against a caller's context (own app,
//! category, tags) so each app can suggest its siblings.

pub mod catalog;
pub mod config;
pub mod models;
pub mod services;

pub use catalog::{Catalog, CatalogError};
pub use config::Config;
pub use models::{Product, RecommendationRequest, ScoredCandidate, DEFAULT_MAX_ITEMS};
pub use services::{rank, rank_scored, score, Ranker, ScoreRanker, ScoreWeights};
