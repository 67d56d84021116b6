use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{error::AppError, state::SharedState};

const CORS_HEADERS: [(header::HeaderName, &str); 3] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
    (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type, Authorization"),
];

/// Mounted for every method; the gateway decides what is allowed.
///
/// The method is checked before the body so an oversized non-POST request
/// still gets a 405.
pub async fn chat_handler(
    State(state): State<SharedState>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    if method == Method::OPTIONS {
        return (StatusCode::OK, CORS_HEADERS).into_response();
    }
    if method != Method::POST {
        return (CORS_HEADERS, AppError::MethodNotAllowed).into_response();
    }

    let body = match body {
        Ok(body) => body,
        Err(rejection) => return (CORS_HEADERS, AppError::from(rejection)).into_response(),
    };

    match state.gateway.handle(&method, &body).await {
        Ok(reply) => (CORS_HEADERS, Json(reply)).into_response(),
        Err(err) => (CORS_HEADERS, err).into_response(),
    }
}
