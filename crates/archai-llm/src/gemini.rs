use crate::ports::CompletionProvider;
use archai_core::error::{ArchaiError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const PROVIDER_NAME: &str = "gemini";

/// Google Gemini completion provider
pub struct GeminiProvider {
    /// Base URL for the Generative Language API
    base_url: String,

    /// Model name (e.g., "gemini-2.5-pro")
    model: String,

    api_key: String,

    /// HTTP client
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Create a new Gemini provider against a custom endpoint
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Create against the public Google endpoint
    pub fn hosted(model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::new("https://generativelanguage.googleapis.com", model, api_key)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    fn unavailable(reason: String) -> ArchaiError {
        ArchaiError::ProviderUnavailable {
            provider: PROVIDER_NAME.to_string(),
            reason,
        }
    }
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn complete(&self, prompt: &str, system: Option<&str>) -> Result<String> {
        let request = GenerateContentRequest::new(prompt, system);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Self::unavailable(format!("Failed to connect to Gemini: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(Self::unavailable(format!(
                "Gemini API error ({}): {}",
                status, error_text
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Self::unavailable(format!("Failed to parse Gemini response: {}", e)))?;

        body.into_text()
    }
}

/// Request body for the generateContent API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,

    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
}

impl GenerateContentRequest {
    fn new(prompt: &str, system: Option<&str>) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: Some(prompt.to_string()) }],
            }],
            system_instruction: system.map(|text| Content {
                role: None,
                parts: vec![Part { text: Some(text.to_string()) }],
            }),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,

    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

/// Response from the generateContent API
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts
    fn into_text(self) -> Result<String> {
        let content = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .ok_or_else(|| ArchaiError::MalformedModelOutput {
                reason: "Gemini returned no candidates".to_string(),
            })?;

        let text: String = content.parts.into_iter().filter_map(|part| part.text).collect();

        if text.trim().is_empty() {
            return Err(ArchaiError::MalformedModelOutput {
                reason: "Gemini returned an empty completion".to_string(),
            });
        }

        Ok(text)
    }
}
