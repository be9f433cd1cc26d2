//! ArchAI LLM - Completion providers and layout generation
//!
//! This crate defines the completion port, the Gemini and OpenAI adapters,
//! and the generator that turns a project configuration into rendered layouts
//! by walking an ordered chain of providers.

pub mod gemini;
pub mod generator;
pub mod openai;
pub mod parse;
pub mod ports;
pub mod prompt;

// Re-export main types
pub use gemini::GeminiProvider;
pub use generator::{LayoutGenerator, ProviderStrategy};
pub use openai::OpenAiProvider;
pub use ports::CompletionProvider;
