//! OpenAI-compatible chat-completions client
//!
//! Implements both `Generator` and `Classifier`: classification is the same
//! endpoint with the intent prompt.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::capabilities::{Classifier, Generator};
use crate::config::LlmConfig;
use crate::error::{DocMindError, Result};
use crate::prompts;

pub struct OpenAiClient {
    http: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(DocMindError::Config {
                message: "OPENAI_API_KEY is not set".into(),
            });
        }
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| DocMindError::Internal {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    async fn chat(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": user_prompt}
            ],
            "temperature": 0.2
        });

        let resp = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body_text = resp
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            return Err(DocMindError::Generation {
                message: format!("chat completion returned {}: {}", status, body_text),
            });
        }

        let val: serde_json::Value = resp.json().await?;
        val.get("choices")
            .and_then(|c| c.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .map(|content| content.trim().to_string())
            .ok_or_else(|| DocMindError::Generation {
                message: "chat completion response had no message content".into(),
            })
    }
}

#[async_trait]
impl Generator for OpenAiClient {
    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        self.chat(system_prompt, user_prompt).await
    }
}

#[async_trait]
impl Classifier for OpenAiClient {
    async fn classify(&self, query: &str) -> Result<String> {
        self.chat(prompts::INTENT_SYSTEM, &prompts::intent_classification(query))
            .await
    }
}
