//! Completion provider seam.
//!
//! The gateway only ever sees [`ProviderError`], whose [`ProviderFailure`]
//! kind is a closed set. Adapters translate vendor-specific failures into it.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptMessage {
    pub role: PromptRole,
    pub content: String,
}

impl PromptMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: PromptRole::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: PromptRole::User, content: content.into() }
    }
}

/// One completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub messages: Vec<PromptMessage>,
    /// Token ceiling for the generated text.
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderFailure {
    RateLimited,
    QuotaExceeded,
    AuthFailed,
    ModelUnavailable,
    NetworkError,
    Unknown,
}

impl ProviderFailure {
    /// Classify a provider failure from its error code, HTTP status and
    /// whether it happened at the transport level.
    ///
    /// Checks run in a fixed order: rate limit, quota, authentication,
    /// model, network, then the catch-all.
    pub fn classify(code: Option<&str>, status: Option<u16>, network: bool) -> Self {
        match (code, status) {
            (Some("rate_limit_exceeded"), _) => Self::RateLimited,
            (Some("insufficient_quota"), _) => Self::QuotaExceeded,
            (Some("invalid_api_key"), _) | (_, Some(401)) => Self::AuthFailed,
            (Some("model_not_found"), _) | (_, Some(404)) => Self::ModelUnavailable,
            _ if network => Self::NetworkError,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Error)]
#[error("{kind:?}: {detail}")]
pub struct ProviderError {
    pub kind: ProviderFailure,
    pub detail: String,
}

impl ProviderError {
    pub fn new(kind: ProviderFailure, detail: impl Into<String>) -> Self {
        Self { kind, detail: detail.into() }
    }
}

/// Something that turns a prompt into generated text.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Run one completion and return the first choice's text, if any.
    async fn complete(&self, request: CompletionRequest) -> Result<Option<String>, ProviderError>;
}
