//! Error types for ArchAI

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchaiError {
    // Generation errors
    #[error("AI generation failed")]
    GenerationFailed { attempts: Vec<String> },

    #[error("Malformed model output: {reason}")]
    MalformedModelOutput { reason: String },

    #[error("Provider {provider} unavailable: {reason}")]
    ProviderUnavailable { provider: String, reason: String },

    // Project errors
    #[error("Layout index {index} out of range for {len} layouts")]
    InvalidLayoutReference { index: usize, len: usize },

    #[error("Invalid project configuration for {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Project not found: {id}")]
    ProjectNotFound { id: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ArchaiError {
    /// Whether this error may be recovered by trying the next generation provider
    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            ArchaiError::ProviderUnavailable { .. } | ArchaiError::MalformedModelOutput { .. }
        )
    }
}

impl From<serde_json::Error> for ArchaiError {
    fn from(err: serde_json::Error) -> Self {
        ArchaiError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ArchaiError>;
