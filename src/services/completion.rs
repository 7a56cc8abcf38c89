use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed instruction sent as the system turn of every upstream call.
const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Client for an OpenAI-style chat-completion API.
///
/// Built once at startup and shared by all requests. The base URL is
/// configurable so tests can point the client at a local stub server.
#[derive(Clone)]
pub struct CompletionClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("chat completion request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("chat completion API returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("chat completion response contained no reply text")]
    MissingContent,
}

// ── Wire types for the chat-completions endpoint ──────────────────────────

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl CompletionClient {
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            model,
            base_url,
        }
    }

    /// Send one message upstream and return the reply text.
    ///
    /// The conversation is always exactly two turns: the fixed system
    /// instruction plus the user message. The call is attempted once per
    /// request; no retry, no timeout beyond the client default.
    pub async fn complete(&self, user_message: &str) -> Result<String, CompletionError> {
        let request = CompletionRequest {
            model: &self.model,
            messages: vec![
                WireMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                WireMessage {
                    role: "user",
                    content: user_message,
                },
            ],
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Status { status, body });
        }

        let completion: CompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(CompletionError::MissingContent)
    }
}
