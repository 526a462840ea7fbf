use std::fmt;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Fixed sampling temperature. High enough to keep the three styles apart,
/// low enough that the hook-or-question instruction still binds.
pub const TEMPERATURE: f64 = 0.7;

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

#[derive(Debug)]
pub enum CompletionError {
    Request(reqwest::Error),
    Api { status: StatusCode, body: String },
    EmptyResponse,
}

impl fmt::Display for CompletionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(source) => write!(f, "completion request failed: {source}"),
            Self::Api { status, body } => write!(f, "completion API error {status}: {body}"),
            Self::EmptyResponse => write!(f, "completion response did not contain message content"),
        }
    }
}

impl std::error::Error for CompletionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Request(source) => Some(source),
            _ => None,
        }
    }
}

/// Issues exactly one non-streaming chat-completion request and returns the
/// primary message content. One attempt, one outcome: no retry, no backoff.
pub async fn complete(
    client: &reqwest::Client,
    base_url: &str,
    api_key: &str,
    model: &str,
    messages: &[ChatMessage],
) -> Result<String, CompletionError> {
    let payload = ChatCompletionRequest {
        model,
        messages,
        temperature: TEMPERATURE,
    };

    let url = format!("{}{CHAT_COMPLETIONS_PATH}", base_url.trim_end_matches('/'));
    let response = client
        .post(&url)
        .bearer_auth(api_key)
        .json(&payload)
        .send()
        .await
        .map_err(CompletionError::Request)?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(CompletionError::Api { status, body });
    }

    let body: ChatCompletionResponse = response.json().await.map_err(CompletionError::Request)?;
    body.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
        .ok_or(CompletionError::EmptyResponse)
}
