//! Layout generation over an ordered provider chain
//!
//! Providers are tried strictly one after another. The first completion that
//! decodes into layouts wins; when every provider fails the generator reports
//! a single [`ArchaiError::GenerationFailed`] carrying each attempt's reason.
//! Only provider failures (see [`ArchaiError::is_provider_failure`]) move on to
//! the next provider. Any other error ends generation as is.

use std::env;
use std::sync::Arc;

use archai_core::config::LayeredConfig;
use archai_core::error::{ArchaiError, Result};
use archai_core::models::{Dimensions, Layout, ProjectConfig};
use archai_core::render::render_layouts;

use crate::gemini::GeminiProvider;
use crate::openai::OpenAiProvider;
use crate::parse::parse_layouts;
use crate::ports::CompletionProvider;
use crate::prompt::{build_prompt, FALLBACK_SYSTEM_INSTRUCTION};

/// One entry in the provider chain
#[derive(Clone)]
pub struct ProviderStrategy {
    pub provider: Arc<dyn CompletionProvider>,
    pub system_instruction: Option<String>,
}

impl ProviderStrategy {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            system_instruction: None,
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    async fn attempt(&self, prompt: &str) -> Result<Vec<Layout>> {
        let text = self
            .provider
            .complete(prompt, self.system_instruction.as_deref())
            .await?;
        parse_layouts(&text)
    }
}

/// Turns a project configuration into rendered candidate layouts
#[derive(Clone)]
pub struct LayoutGenerator {
    strategies: Vec<ProviderStrategy>,
    layout_count: u32,
}

impl LayoutGenerator {
    pub fn new(layout_count: u32) -> Self {
        Self {
            strategies: Vec::new(),
            layout_count: layout_count.max(1),
        }
    }

    /// Append a provider to the end of the chain
    pub fn with_strategy(mut self, strategy: ProviderStrategy) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Gemini first, then OpenAI with a JSON-only system instruction
    ///
    /// A provider whose key is missing is left out of the chain.
    pub fn from_config(
        config: &LayeredConfig,
        gemini_key: Option<String>,
        openai_key: Option<String>,
    ) -> Self {
        let mut generator = Self::new(config.layout_count.value);

        match gemini_key {
            Some(key) => {
                let provider = GeminiProvider::hosted(config.primary_model.value.clone(), key);
                generator = generator.with_strategy(ProviderStrategy::new(Arc::new(provider)));
            }
            None => tracing::warn!("GEMINI_API_KEY not set, skipping Gemini provider"),
        }

        match openai_key {
            Some(key) => {
                let provider = OpenAiProvider::hosted(
                    config.fallback_model.value.clone(),
                    key,
                    config.temperature.value,
                );
                generator = generator.with_strategy(
                    ProviderStrategy::new(Arc::new(provider))
                        .with_system_instruction(FALLBACK_SYSTEM_INSTRUCTION),
                );
            }
            None => tracing::warn!("OPENAI_API_KEY not set, skipping OpenAI provider"),
        }

        generator
    }

    /// Build the default chain with keys taken from the environment
    pub fn from_env(config: &LayeredConfig) -> Self {
        Self::from_config(config, api_key("GEMINI_API_KEY"), api_key("OPENAI_API_KEY"))
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.provider.name()).collect()
    }

    pub fn layout_count(&self) -> u32 {
        self.layout_count
    }

    /// Generate, render and size layouts for a project
    pub async fn generate(&self, config: &ProjectConfig) -> Result<Vec<Layout>> {
        let prompt = build_prompt(config, self.layout_count);
        let mut attempts = Vec::with_capacity(self.strategies.len());

        for strategy in &self.strategies {
            let name = strategy.provider.name();
            tracing::debug!(provider = %name, "Requesting floor plans");

            match strategy.attempt(&prompt).await {
                Ok(mut layouts) => {
                    tracing::info!(
                        provider = %name,
                        layouts = layouts.len(),
                        "Generated floor plans"
                    );
                    finish_layouts(&mut layouts, config);
                    return Ok(layouts);
                }
                Err(e) if e.is_provider_failure() => {
                    tracing::warn!(provider = %name, error = %e, "Provider failed, falling back");
                    attempts.push(format!("{}: {}", name, e));
                }
                Err(e) => {
                    tracing::error!(provider = %name, error = %e, "Generation aborted");
                    return Err(e);
                }
            }
        }

        if attempts.is_empty() {
            attempts.push("no generation providers configured".to_string());
        }
        tracing::error!(attempts = ?attempts, "All generation providers failed");

        Err(ArchaiError::GenerationFailed { attempts })
    }
}

/// Render every layout and stamp the site dimensions on it
fn finish_layouts(layouts: &mut [Layout], config: &ProjectConfig) {
    let dimensions = Dimensions::from_site(&config.site_constraints);
    for layout in layouts.iter_mut() {
        layout.dimensions = dimensions;
    }
    render_layouts(layouts);
}

fn api_key(var: &str) -> Option<String> {
    env::var(var).ok().filter(|key| !key.trim().is_empty())
}
