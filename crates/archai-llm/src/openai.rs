use crate::ports::CompletionProvider;
use archai_core::error::{ArchaiError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const PROVIDER_NAME: &str = "openai";

/// OpenAI chat-completions provider
pub struct OpenAiProvider {
    /// Base URL for the API (e.g., "https://api.openai.com")
    base_url: String,

    /// Model name (e.g., "gpt-4o")
    model: String,

    api_key: String,

    /// Sampling temperature
    temperature: f32,

    /// HTTP client
    client: reqwest::Client,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider against a custom endpoint
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        temperature: f32,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
            temperature,
            client: reqwest::Client::new(),
        }
    }

    /// Create against the public OpenAI endpoint
    pub fn hosted(model: impl Into<String>, api_key: impl Into<String>, temperature: f32) -> Self {
        Self::new("https://api.openai.com", model, api_key, temperature)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn request(&self, prompt: &str, system: Option<&str>) -> ChatRequest {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: Some(system.to_string()),
            });
        }
        messages.push(ChatMessage {
            role: "user".to_string(),
            content: Some(prompt.to_string()),
        });

        ChatRequest {
            model: self.model.clone(),
            messages,
            temperature: self.temperature,
        }
    }

    fn unavailable(reason: String) -> ArchaiError {
        ArchaiError::ProviderUnavailable {
            provider: PROVIDER_NAME.to_string(),
            reason,
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn complete(&self, prompt: &str, system: Option<&str>) -> Result<String> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&self.request(prompt, system))
            .send()
            .await
            .map_err(|e| Self::unavailable(format!("Failed to connect to OpenAI: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(Self::unavailable(format!(
                "OpenAI API error ({}): {}",
                status, error_text
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| Self::unavailable(format!("Failed to parse OpenAI response: {}", e)))?;

        body.into_text()
    }
}

/// Request body for the chat-completions API
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,

    #[serde(default)]
    content: Option<String>,
}

/// Response from the chat-completions API
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

impl ChatResponse {
    fn into_text(self) -> Result<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| ArchaiError::MalformedModelOutput {
                reason: "OpenAI returned no message content".to_string(),
            })
    }
}
