// src/services/gateway.rs
use std::sync::Arc;

use axum::http::Method;
use serde_json::Value;
use tracing::{error, info};

use crate::config::Config;
use crate::error::AppError;
use crate::message::{ChatRequest, ChatResponse, now_timestamp};
use crate::services::openai::OpenAiProvider;
use crate::services::provider::{
    CompletionProvider, CompletionRequest, PromptMessage, ProviderError, ProviderFailure,
};

pub const MAX_MESSAGE_CHARS: usize = 2000;
pub const MAX_COMPLETION_TOKENS: u32 = 500;
pub const TEMPERATURE: f32 = 0.7;

pub const SYSTEM_PROMPT: &str = "\
You are Model Day AI, a personal modeling career assistant for a modeling professional. \
You have access to ONLY their data and can help analyze it and provide insights.

Key capabilities:
- Analyze modeling jobs, events, and career data
- Calculate earnings and financial insights
- Provide career advice based on their specific data
- Answer questions about their modeling portfolio
- Help with scheduling and planning

Guidelines:
- Only reference data that has been provided in the context
- Be helpful, professional, and encouraging
- Provide specific insights based on their actual data
- If asked about data not in context, politely explain you don't have access to that information
- Keep responses concise but informative
- Focus on actionable advice and insights

Remember: You are their personal AI assistant with access to their modeling career data only.";

/// Turns one inbound chat request into one provider call.
///
/// `provider` is `None` when no credential was configured; valid requests are
/// then refused with a configuration error instead of reaching the network.
#[derive(Clone)]
pub struct ChatGateway {
    provider: Option<Arc<dyn CompletionProvider>>,
}

impl ChatGateway {
    pub fn new(provider: Option<Arc<dyn CompletionProvider>>) -> Self {
        Self { provider }
    }

    pub fn from_config(config: &Config) -> Self {
        let provider = config.openai_api_key.as_ref().map(|key| {
            Arc::new(OpenAiProvider::new(
                key.clone(),
                config.openai_base_url.clone(),
                config.openai_model.clone(),
            )) as Arc<dyn CompletionProvider>
        });
        Self::new(provider)
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Validate the raw request then forward it.
    pub async fn handle(&self, method: &Method, body: &[u8]) -> Result<ChatResponse, AppError> {
        let request = validate(method, body)?;
        self.reply(request).await
    }

    pub async fn reply(&self, request: ChatRequest) -> Result<ChatResponse, AppError> {
        let Some(provider) = self.provider.as_ref() else {
            error!("OPENAI_API_KEY is not set; refusing chat request");
            return Err(AppError::Configuration);
        };

        info!(
            message_length = request.message.chars().count(),
            context_length = request.context.chars().count(),
            "processing chat request"
        );

        let text = provider
            .complete(build_prompt(&request))
            .await
            .and_then(|text| {
                text.filter(|t| !t.is_empty()).ok_or_else(|| {
                    ProviderError::new(ProviderFailure::Unknown, "no response generated")
                })
            })
            .map_err(|e| {
                error!(kind = ?e.kind, detail = %e.detail, "chat completion failed");
                AppError::Provider(e)
            })?;

        info!(response_length = text.chars().count(), "chat response generated");

        Ok(ChatResponse { response: text, timestamp: now_timestamp() })
    }
}

/// Check the method and body in order: method, `message`, `context`, length.
///
/// A body that is not a JSON object is treated like an empty object.
pub fn validate(method: &Method, body: &[u8]) -> Result<ChatRequest, AppError> {
    if *method != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }

    let payload = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => Default::default(),
    };

    let message = match payload.get("message") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => return Err(AppError::InvalidRequest("Message is required and must be a string")),
    };
    let context = match payload.get("context") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => return Err(AppError::InvalidRequest("Context is required and must be a string")),
    };

    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(AppError::MessageTooLong);
    }

    Ok(ChatRequest { message, context })
}

/// Fixed directive, then the caller's context verbatim, then the user message.
pub fn build_prompt(request: &ChatRequest) -> CompletionRequest {
    CompletionRequest {
        messages: vec![
            PromptMessage::system(SYSTEM_PROMPT),
            PromptMessage::system(request.context.clone()),
            PromptMessage::user(request.message.clone()),
        ],
        max_tokens: MAX_COMPLETION_TOKENS,
        temperature: TEMPERATURE,
    }
}
