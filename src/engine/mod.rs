//! Word discovery and scoring
//!
//! This module finds word candidates in a grid and scores them under a
//! configurable policy.

pub mod delta;
pub mod policy;
pub mod scanner;
mod scorer;

pub use delta::{NovelDelta, clamped_delta, novel_word_delta};
pub use policy::{DedupeMode, ScoreConvention, ScorePolicy};
pub use scanner::scan_grid;
pub use scorer::{ScoreOutcome, WordHit, accepts, score, score_candidates};
