//! Anthropic Messages API backend.
//!
//! Speaks the `v1/messages` wire format directly over blocking HTTP: the
//! system instruction goes in the `system` field, the user instruction as a
//! single `user` message, and the reply text is the concatenation of the
//! `text` content blocks in the response.

use crate::config::Config;
use crate::error::{PinpostError, Result};
use crate::model::{ModelBackend, ModelError};
use serde_json::{Value, json};
use std::time::Duration;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Generous whole-request ceiling; the model call is the slow step of every
/// invocation and page-fetching replies can take a while.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(180);

/// Blocking client for the Anthropic Messages API.
#[derive(Debug)]
pub struct AnthropicBackend {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    base_url: String,
}

impl AnthropicBackend {
    /// Build a backend from configuration.
    ///
    /// Fails with a user error when the API key is missing, so the problem
    /// surfaces before any network traffic.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.require_anthropic_key()?.to_string();

        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| PinpostError::ExternalCall(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            base_url: config.anthropic_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }
}

impl ModelBackend for AnthropicBackend {
    fn generate(
        &self,
        system_instruction: &str,
        user_instruction: &str,
    ) -> std::result::Result<String, ModelError> {
        let body = json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "system": system_instruction,
            "messages": [
                { "role": "user", "content": user_instruction }
            ],
        });

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .map_err(|e| ModelError(format!("request to Anthropic failed: {}", e)))?;

        let status = response.status();
        let payload: Value = response
            .json()
            .map_err(|e| ModelError(format!("Anthropic returned unreadable body: {}", e)))?;

        if !status.is_success() {
            let message = payload
                .pointer("/error/message")
                .and_then(Value::as_str)
                .unwrap_or("no error message in response");
            return Err(ModelError(format!(
                "Anthropic returned {}: {}",
                status, message
            )));
        }

        let text = collect_text_blocks(&payload);
        if text.is_empty() {
            return Err(ModelError(
                "Anthropic response contained no text content".to_string(),
            ));
        }

        Ok(text)
    }
}

/// Concatenate the `text` content blocks of a Messages API response.
fn collect_text_blocks(payload: &Value) -> String {
    payload
        .pointer("/content")
        .and_then(Value::as_array)
        .map(|blocks| {
            blocks
                .iter()
                .filter(|b| b.pointer("/type").and_then(Value::as_str) == Some("text"))
                .filter_map(|b| b.pointer("/text").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .concat()
        })
        .unwrap_or_default()
}
