pub mod ranking;

pub use ranking::{rank, rank_scored, score, Ranker, ScoreRanker, ScoreWeights};
