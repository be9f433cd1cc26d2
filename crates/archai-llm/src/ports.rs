//! LLM port definitions

use archai_core::error::Result;
use async_trait::async_trait;

/// Port for a generative-model completion service
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Short identifier used in logs and failure diagnostics
    fn name(&self) -> &str;

    /// Complete a prompt and return the raw model text
    ///
    /// # Arguments
    /// * `prompt` - The user prompt
    /// * `system` - Optional system instruction sent alongside the prompt
    async fn complete(&self, prompt: &str, system: Option<&str>) -> Result<String>;
}
