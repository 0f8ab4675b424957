// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{JobPosting, CandidateProfile};
pub use requests::CalculateScoreRequest;
pub use responses::{ScoreResponse, HealthResponse, ErrorResponse};
