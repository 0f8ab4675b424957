use actix_web::{web, HttpRequest, HttpResponse, Responder};
use crate::core::calculate_match_score;
use crate::errors::ApiError;
use crate::models::{CalculateScoreRequest, HealthResponse, ScoreResponse};

/// Configure scoring routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/calculate_score", web::post().to(calculate_score));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Calculate score endpoint
///
/// POST /calculate_score
///
/// Request body:
/// ```json
/// {
///   "job": {
///     "description": "string",
///     "required_skills": ["string"],
///     "required_education": "string",
///     "location": "string",
///     "experience": 3,
///     "salary_range": [80000, 120000]
///   },
///   "candidate": {
///     "name": "string",
///     "skills": ["string"],
///     "education": "string",
///     "experience": 5,
///     "desired_salary": 100000,
///     "location": "string",
///     "willing_to_relocate": true
///   }
/// }
/// ```
///
/// Malformed JSON is rejected by the extractor. The parsed body is then
/// decoded with path tracking so a validation error names the failing field,
/// e.g. `candidate.willing_to_relocate`.
async fn calculate_score(
    body: web::Json<serde_json::Value>,
    http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let req: CalculateScoreRequest = serde_path_to_error::deserialize(body.into_inner())
        .map_err(|e| {
            let err = ApiError::from(e);
            tracing::info!("Validation failed on {}: {}", http_req.path(), err);
            err
        })?;

    let score = calculate_match_score(&req.job, &req.candidate);

    tracing::debug!(
        "Scored candidate {} against job in {}: {}",
        req.candidate.name,
        req.job.location,
        score
    );

    Ok(HttpResponse::Ok().json(ScoreResponse { score }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_response_shape() {
        let body = serde_json::to_value(ScoreResponse { score: 85 }).unwrap();

        assert_eq!(body, serde_json::json!({ "score": 85 }));
    }
}
