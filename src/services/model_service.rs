use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{config::Config, errors::ProviderError};

const ERROR_BODY_LIMIT: usize = 100;

/// Prompt in, text out. One attempt per call, no retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatReply,
}

/// Only `content` is required; some providers omit `role` in replies.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub role: Option<String>,
    pub content: String,
}

impl ChatCompletionResponse {
    pub fn into_content(self) -> Result<String, ProviderError> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::MalformedResponse("response had no choices".to_string()))
    }
}

/// Client for any OpenAI-compatible chat-completion endpoint.
pub struct OpenAiCompatibleModel {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<SecretString>,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiCompatibleModel {
    pub fn new(config: &Config) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.api_url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    pub fn build_request(&self, prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

#[async_trait]
impl ChatModel for OpenAiCompatibleModel {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let api_key = self.api_key.as_ref().ok_or(ProviderError::MissingApiKey)?;
        let started = Instant::now();

        log::info!("Requesting completion from {} using {}", self.endpoint, self.model);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key.expose_secret())
            .json(&self.build_request(prompt))
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = classify_status(status, &body);
            log::warn!("Completion request failed after {:?}: {}", started.elapsed(), err);
            return Err(err);
        }

        let content = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?
            .into_content()?;

        log::info!(
            "Completion received in {:?} ({} chars)",
            started.elapsed(),
            content.len()
        );
        Ok(content)
    }
}

fn classify_transport_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        log::warn!("Completion request timed out");
        ProviderError::Timeout
    } else {
        log::warn!("Completion request failed: {}", err);
        ProviderError::Network(err.to_string())
    }
}

pub fn classify_status(status: StatusCode, body: &str) -> ProviderError {
    if status == StatusCode::UNAUTHORIZED {
        return ProviderError::AuthRejected;
    }
    ProviderError::Status {
        status: status.as_u16(),
        body: truncate(body, ERROR_BODY_LIMIT),
    }
}

fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
