use serde::{Deserialize, Serialize};
use crate::models::domain::{CandidateProfile, JobPosting};

/// Request to score a candidate against a job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateScoreRequest {
    pub job: JobPosting,
    pub candidate: CandidateProfile,
}
