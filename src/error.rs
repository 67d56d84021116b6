//! HTTP-boundary error type.
//!
//! Handlers return `Result<T, AppError>`; every variant renders as an
//! [`ErrorResponse`] body with a fixed category label.

use axum::Json;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::message::ErrorResponse;
use crate::services::provider::{ProviderError, ProviderFailure};

const UNAVAILABLE_MESSAGE: &str =
    "I'm having trouble connecting to my AI service. Please try again in a moment.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Missing or malformed request field; the payload is the caller-facing message.
    #[error("invalid request: {0}")]
    InvalidRequest(&'static str),

    #[error("message too long")]
    MessageTooLong,

    /// The provider credential is not configured.
    #[error("configuration error")]
    Configuration,

    /// The request body could not be buffered, e.g. it exceeds the size limit.
    #[error("body rejected: {0}")]
    Body(#[from] BytesRejection),

    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Last-resort failure raised by the host rather than the gateway.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::InvalidRequest(_) | AppError::MessageTooLong => StatusCode::BAD_REQUEST,
            AppError::Configuration | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Body(rejection) => rejection.status(),
            AppError::Provider(e) => match e.kind {
                ProviderFailure::RateLimited | ProviderFailure::QuotaExceeded => {
                    StatusCode::TOO_MANY_REQUESTS
                }
                ProviderFailure::NetworkError => StatusCode::SERVICE_UNAVAILABLE,
                ProviderFailure::AuthFailed
                | ProviderFailure::ModelUnavailable
                | ProviderFailure::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Category label and caller-facing message.
    pub fn describe(&self) -> (&'static str, &'static str) {
        match self {
            AppError::MethodNotAllowed => {
                ("Method not allowed", "This endpoint only accepts POST requests")
            }
            AppError::InvalidRequest(msg) => ("Invalid request", *msg),
            AppError::MessageTooLong => {
                ("Message too long", "Message must be less than 2000 characters")
            }
            AppError::Configuration => {
                ("Configuration error", "AI service is not properly configured")
            }
            AppError::Internal(_) => {
                ("Internal server error", "Something went wrong with the server")
            }
            AppError::Body(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                ("Payload too large", "Request body exceeds the size limit")
            }
            AppError::Body(_) => ("Invalid request", "Request body could not be read"),
            AppError::Provider(e) => match e.kind {
                ProviderFailure::RateLimited => (
                    "Rate limit exceeded",
                    "I'm currently experiencing high demand. Please wait a moment and try again.",
                ),
                ProviderFailure::QuotaExceeded => (
                    "Quota exceeded",
                    "The API quota has been exceeded. Please contact support or try again later.",
                ),
                ProviderFailure::AuthFailed => (
                    "Authentication error",
                    "There was an issue with the AI service authentication.",
                ),
                ProviderFailure::ModelUnavailable => {
                    ("Model error", "The AI model is currently unavailable.")
                }
                ProviderFailure::NetworkError => (
                    "Network error",
                    "I'm having trouble connecting to my AI service. Please check your internet connection and try again.",
                ),
                ProviderFailure::Unknown => ("Internal server error", UNAVAILABLE_MESSAGE),
            },
        }
    }

    pub fn to_body(&self) -> ErrorResponse {
        let (error, message) = self.describe();
        ErrorResponse { error: error.to_string(), message: message.to_string() }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_body())).into_response()
    }
}
