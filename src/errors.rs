use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Why a single chat-completion call did not produce text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("Invalid API key")]
    AuthRejected,

    #[error("Request timed out")]
    Timeout,

    #[error("Connection error: {0}")]
    Network(String),

    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Please enter a topic")]
    MissingTopic,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid API key: {0}")]
    AuthRejected(String),

    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingTopic => "MISSING_TOPIC",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::AuthRejected(_) => "AUTH_REJECTED",
            AppError::ProviderUnavailable(_) => "PROVIDER_UNAVAILABLE",
            AppError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub error_code: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingTopic => StatusCode::BAD_REQUEST,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthRejected(_) => StatusCode::BAD_GATEWAY,
            AppError::ProviderUnavailable(_) => StatusCode::BAD_GATEWAY,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            error_code: self.error_code(),
        })
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::MissingApiKey => AppError::ServiceUnavailable(err.to_string()),
            ProviderError::AuthRejected => {
                AppError::AuthRejected("check the provider credentials".to_string())
            }
            other => AppError::ProviderUnavailable(other.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
