use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use serde_json::error::Category;
use thiserror::Error;

use crate::models::ErrorResponse;

/// Errors surfaced to API callers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body is JSON but does not match the declared request shape
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Payload too large: limit is {limit} bytes")]
    PayloadTooLarge { limit: usize },
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::InvalidJson(_) => "invalid_json",
            ApiError::PayloadTooLarge { .. } => "payload_too_large",
        }
    }
}

impl From<error::JsonPayloadError> for ApiError {
    fn from(err: error::JsonPayloadError) -> Self {
        match err {
            error::JsonPayloadError::Deserialize(e) => match e.classify() {
                Category::Data => ApiError::Validation(e.to_string()),
                Category::Io | Category::Syntax | Category::Eof => {
                    ApiError::InvalidJson(e.to_string())
                }
            },
            error::JsonPayloadError::Overflow { limit }
            | error::JsonPayloadError::OverflowKnownLength { limit, .. } => {
                ApiError::PayloadTooLarge { limit }
            }
            other => ApiError::InvalidJson(other.to_string()),
        }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for ApiError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        let inner = err.into_inner();
        if path == "." {
            ApiError::Validation(inner.to_string())
        } else {
            ApiError::Validation(format!("{}: {}", path, inner))
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.code().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let api_error = ApiError::from(err);
    tracing::info!("JSON payload error on {}: {}", req.path(), api_error);
    api_error.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    fn deserialize_error(body: &str) -> error::JsonPayloadError {
        let err = serde_json::from_str::<crate::models::CandidateProfile>(body).unwrap_err();
        error::JsonPayloadError::Deserialize(err)
    }

    #[test]
    fn test_shape_mismatch_is_validation_error() {
        let err = ApiError::from(deserialize_error(r#"{"name": "A"}"#));

        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.to_string().contains("skills"));
    }

    #[test]
    fn test_malformed_body_is_invalid_json() {
        let err = ApiError::from(deserialize_error(r#"{"name": "#));

        assert!(matches!(err, ApiError::InvalidJson(_)));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_message_carries_path() {
        let value = serde_json::json!({
            "name": "A",
            "skills": ["Go"],
            "education": "BS",
            "experience": 5,
            "desired_salary": 100000,
            "location": "Remote",
            "willing_to_relocate": "yes"
        });
        let err = serde_path_to_error::deserialize::<_, crate::models::CandidateProfile>(value)
            .unwrap_err();

        let api_error = ApiError::from(err);
        assert!(
            api_error.to_string().starts_with("Validation failed: willing_to_relocate: invalid type"),
            "message: {}",
            api_error
        );
    }

    #[test]
    fn test_overflow_maps_to_payload_too_large() {
        let err = ApiError::from(error::JsonPayloadError::Overflow { limit: 16 });

        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.code(), "payload_too_large");
    }
}
