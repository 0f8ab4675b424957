use crate::models::{CandidateProfile, JobPosting};

/// Score returned for every structurally valid job/candidate pair
pub const PLACEHOLDER_SCORE: i64 = 85;

/// Calculate a match score for a candidate against a job posting
///
/// No matching heuristic exists yet: the score is the same for every
/// input, so neither record is inspected.
pub fn calculate_match_score(_job: &JobPosting, _candidate: &CandidateProfile) -> i64 {
    PLACEHOLDER_SCORE
}
