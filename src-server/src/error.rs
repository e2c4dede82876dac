//! API Error Handling
//!
//! Maps domain failures and request-decoding failures onto HTTP statuses
//! with a JSON body of the form `{"code", "message", "details"?}`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use taskboard_core::task::DraftError;

use crate::domain::DomainError;

pub type ApiResult<T> = Result<T, ApiErrorResponse>;

/// JSON error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine-readable code.
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    pub status: StatusCode,
    pub error: ApiError,
}

impl ApiErrorResponse {
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }

    pub fn validation(message: impl Into<String>, details: Vec<FieldError>) -> Self {
        let mut error = ApiError::new("VALIDATION_ERROR", message);
        if !details.is_empty() {
            error.details = Some(details);
        }
        Self::new(StatusCode::BAD_REQUEST, error)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", message))
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            ApiError::new("INVALID_CREDENTIALS", message),
        )
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, ApiError::new("CONFLICT", message))
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::new("INTERNAL_ERROR", "An internal error occurred"),
        )
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<DomainError> for ApiErrorResponse {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::NotFound(_) => Self::not_found("Task not found"),
            DomainError::Unauthorized => Self::unauthorized("Invalid credentials"),
            DomainError::Conflict(message) => Self::conflict(message),
            DomainError::Internal(message) => {
                tracing::error!(%message, "internal error");
                Self::internal()
            }
        }
    }
}

impl From<DraftError> for ApiErrorResponse {
    fn from(error: DraftError) -> Self {
        let field = match error {
            DraftError::EmptyTitle => "title",
        };
        Self::validation(
            "Validation failed",
            vec![FieldError {
                field: field.to_string(),
                message: error.to_string(),
            }],
        )
    }
}

impl From<JsonRejection> for ApiErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "rejected request body");
        Self::validation(rejection.body_text(), Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DomainError::NotFound("x".into()), StatusCode::NOT_FOUND, "NOT_FOUND")]
    #[case(DomainError::Unauthorized, StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS")]
    #[case(DomainError::Conflict("x".into()), StatusCode::CONFLICT, "CONFLICT")]
    #[case(DomainError::Internal("db gone".into()), StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")]
    fn domain_errors_map_to_statuses(
        #[case] error: DomainError,
        #[case] status: StatusCode,
        #[case] code: &str,
    ) {
        let response = ApiErrorResponse::from(error);
        assert_eq!(response.status, status);
        assert_eq!(response.error.code, code);
    }

    #[test]
    fn internal_details_are_not_exposed() {
        let response = ApiErrorResponse::from(DomainError::Internal("secret path".into()));
        assert!(!response.error.message.contains("secret"));
    }

    #[test]
    fn empty_title_names_the_field() {
        let response = ApiErrorResponse::from(DraftError::EmptyTitle);
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        let details = response.error.details.expect("field details");
        assert_eq!(details[0].field, "title");
    }
}
