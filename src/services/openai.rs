//! OpenAI chat completions adapter.
//!
//! Posts to `{base_url}/chat/completions` and reads `choices[0].message.content`.
//! Non-2xx replies are classified from the `error.code` field and the HTTP
//! status; transport failures from the reqwest error chain.

use std::error::Error as StdError;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::provider::{
    CompletionProvider, CompletionRequest, ProviderError, ProviderFailure, PromptMessage,
};

pub struct OpenAiProvider {
    api_key: String,
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl OpenAiProvider {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: model.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: &'a [PromptMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    code: Option<String>,
    message: Option<String>,
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<Option<String>, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatCompletionBody {
            model: &self.model,
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        debug!(%url, model = %self.model, "sending completion request");

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            let text = match resp.text().await {
                Ok(text) => text,
                Err(e) => {
                    debug!(error = %e, %status, "failed to read provider error body");
                    String::new()
                }
            };
            return Err(api_error(status.as_u16(), &text));
        }

        let completion: ChatCompletion = resp.json().await.map_err(transport_error)?;
        Ok(completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content))
    }
}

fn api_error(status: u16, body: &str) -> ProviderError {
    let parsed = serde_json::from_str::<ErrorEnvelope>(body).ok().map(|e| e.error);
    let code = parsed.as_ref().and_then(|e| e.code.as_deref());
    let kind = ProviderFailure::classify(code, Some(status), false);
    let detail = match parsed.as_ref().and_then(|e| e.message.as_deref()) {
        Some(msg) => format!("HTTP {status}: {msg}"),
        None => format!("HTTP {status}: {body}"),
    };
    ProviderError::new(kind, detail)
}

fn transport_error(err: reqwest::Error) -> ProviderError {
    let kind = ProviderFailure::classify(None, err.status().map(|s| s.as_u16()), is_network(&err));
    ProviderError::new(kind, error_chain(&err))
}

/// DNS failures, refused/reset connections and timeouts.
fn is_network(err: &reqwest::Error) -> bool {
    if err.is_connect() || err.is_timeout() {
        return true;
    }
    let mut source = err.source();
    while let Some(cause) = source {
        if let Some(io) = cause.downcast_ref::<std::io::Error>() {
            use std::io::ErrorKind::*;
            if matches!(
                io.kind(),
                ConnectionReset | ConnectionAborted | ConnectionRefused | TimedOut | BrokenPipe
            ) {
                return true;
            }
        }
        if cause.to_string().contains("dns error") {
            return true;
        }
        source = cause.source();
    }
    false
}

fn error_chain(err: &dyn StdError) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
