//! Chat-completions client.

use crate::config::{Config, resolve_api_key};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Request timeout for a single completion; replaces the blocking client's 30s default.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Failure of a single generation attempt.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status.
    #[error("service returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The reply carried no text.
    #[error("reply contained no text")]
    EmptyReply,

    /// The reply text could not be decoded into the expected shape.
    #[error("malformed reply: {0}")]
    Malformed(String),

    /// The reply decoded but is missing required structure.
    #[error("invalid structure: {0}")]
    InvalidStructure(String),
}

/// One completion call: a system instruction and a user message.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub instructions: String,
    pub content: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Something that turns a [`CompletionRequest`] into reply text.
pub trait TextGenerator {
    fn complete(&self, request: &CompletionRequest) -> Result<String, GenerationError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

/// Blocking client for an OpenAI-compatible `chat/completions` endpoint.
pub struct OpenAiClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    api_key: SecretString,
}

impl OpenAiClient {
    pub fn new(config: &Config, api_key: SecretString) -> Result<Self, GenerationError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", config.api_base.trim_end_matches('/')),
            model: config.model.clone(),
            api_key,
        })
    }
}

impl TextGenerator for OpenAiClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, GenerationError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.instructions,
                },
                ChatMessage {
                    role: "user",
                    content: &request.content,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        log::debug!(
            "POST {} (model {}, {} chars)",
            self.endpoint,
            self.model,
            request.content.len()
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let reply: ChatResponse = response
            .json()
            .map_err(|e| GenerationError::Malformed(e.to_string()))?;

        let text = reply
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(GenerationError::EmptyReply)?;

        log::debug!("reply of {} chars", text.len());
        Ok(text)
    }
}

/// Build a client when a credential is available.
///
/// Returns `None` without a credential, or when the HTTP client cannot be
/// constructed; every generation then degrades to its fallback.
pub fn connect(config: &Config, api_key_override: Option<&str>) -> Option<OpenAiClient> {
    let Some(api_key) = resolve_api_key(api_key_override, &config.api_key_env) else {
        log::warn!(
            "{} is not set and no --api-key was given; using default content",
            config.api_key_env
        );
        return None;
    };

    match OpenAiClient::new(config, api_key) {
        Ok(client) => Some(client),
        Err(e) => {
            log::warn!("could not create text-generation client: {}", e);
            None
        }
    }
}
