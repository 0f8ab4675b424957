// Core scoring exports
pub mod scoring;

pub use scoring::{calculate_match_score, PLACEHOLDER_SCORE};
