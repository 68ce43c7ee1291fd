//! HF Router Client
//!
//! Sends the fixed chat-completions request and interprets the router's
//! reply in two phases:
//! - Read the body as raw text, then parse JSON (a non-JSON body is
//!   reported with its leading characters)
//! - A top-level `error` field wins over everything else
//! - Otherwise the reply must carry `choices[0].message.content`

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

use crate::config::{RelayConfig, MAX_TOKENS, SYSTEM_PROMPT, TEMPERATURE};
use crate::error::RelayError;

/// Chat message as the router expects it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: &str) -> Self {
        Self {
            role: "system".to_string(),
            content: content.to_string(),
        }
    }

    pub fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct RouterChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

/// HF router client
pub struct RouterClient {
    client: Client,
    api_url: String,
    model: String,
}

impl RouterClient {
    pub fn new(config: &RelayConfig) -> Self {
        // No request timeout: long router generations are allowed to finish
        Self {
            client: Client::new(),
            api_url: config.api_url.clone(),
            model: config.model.clone(),
        }
    }

    /// Send one prompt through the router and return the generated text.
    ///
    /// The router's HTTP status is not consulted: error payloads are
    /// detected by the body's `error` field, which rides on 200 and
    /// non-200 responses alike.
    pub async fn chat(&self, prompt: &str, api_key: &str) -> Result<String, RelayError> {
        let request = RouterChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        debug!("Calling router: model={}", self.model);

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Router request failed: {}", e);
                RelayError::Internal(e.to_string())
            })?;

        let status = response.status();
        let raw = response.text().await.map_err(|e| {
            error!("Failed to read router response body: {}", e);
            RelayError::Internal(e.to_string())
        })?;

        debug!("Router replied: status={} bytes={}", status, raw.len());

        let data: Value = serde_json::from_str(&raw).map_err(|e| {
            error!("JSON parse error: {} - response text: {}", e, raw);
            RelayError::invalid_body(&raw)
        })?;

        if let Some(err) = data.get("error") {
            error!("Router API error: {}", err);
            return Err(RelayError::UpstreamError(err.clone()));
        }

        let content = data
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty());

        match content {
            Some(text) => Ok(text.to_string()),
            None => {
                error!("No content in router response: {}", data);
                Err(RelayError::MissingContent)
            }
        }
    }
}
