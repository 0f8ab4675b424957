//! Match Score - job/candidate scoring service
//!
//! Exposes `POST /calculate_score`, which decodes a job posting and a
//! candidate profile and returns a placeholder match score.

pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, PLACEHOLDER_SCORE};
pub use errors::ApiError;
pub use models::{JobPosting, CandidateProfile, CalculateScoreRequest, ScoreResponse};
