//! Liveness probe.

use axum::{Json, extract::State};

use crate::message::{HealthResponse, now_timestamp};
use crate::state::SharedState;

/// Always 200; `hasOpenAIKey` mirrors the loaded configuration.
pub async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "Model Day Chat API is running".to_string(),
        timestamp: now_timestamp(),
        environment: state.config.environment.clone(),
        has_openai_key: state.config.has_api_key(),
    })
}
