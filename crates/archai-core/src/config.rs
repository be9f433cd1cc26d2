use crate::error::{ArchaiError, Result};
use crate::estimate::MaterialRates;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for the floor-plan pipeline
///
/// Provider API keys are deliberately absent: they are read from the
/// environment by the binaries and never written to config files.
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub primary_model: ConfigValue<String>,
    pub fallback_model: ConfigValue<String>,
    pub temperature: ConfigValue<f32>,
    pub layout_count: ConfigValue<u32>,
    pub rates: ConfigValue<MaterialRates>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            primary_model: ConfigValue::new("gemini-2.5-pro".to_string(), ConfigSource::Default),
            fallback_model: ConfigValue::new("gpt-4o".to_string(), ConfigSource::Default),
            temperature: ConfigValue::new(0.7, ConfigSource::Default),
            layout_count: ConfigValue::new(3, ConfigSource::Default),
            rates: ConfigValue::new(MaterialRates::default(), ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ArchaiError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| ArchaiError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(model) = file_config.primary_model {
            self.primary_model.update(model, ConfigSource::File);
        }

        if let Some(model) = file_config.fallback_model {
            self.fallback_model.update(model, ConfigSource::File);
        }

        if let Some(temperature) = file_config.temperature {
            self.temperature.update(validate_temperature(temperature)?, ConfigSource::File);
        }

        if let Some(count) = file_config.layout_count {
            self.layout_count.update(validate_layout_count(count)?, ConfigSource::File);
        }

        if let Some(rates) = file_config.rates {
            self.rates.update(rates, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // ARCHAI_PRIMARY_MODEL
        if let Ok(model) = env::var("ARCHAI_PRIMARY_MODEL") {
            self.primary_model.update(model, ConfigSource::Environment);
        }

        // ARCHAI_FALLBACK_MODEL
        if let Ok(model) = env::var("ARCHAI_FALLBACK_MODEL") {
            self.fallback_model.update(model, ConfigSource::Environment);
        }

        // ARCHAI_TEMPERATURE
        if let Ok(temp_str) = env::var("ARCHAI_TEMPERATURE") {
            match parse_temperature(&temp_str) {
                Ok(temperature) => self.temperature.update(temperature, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid ARCHAI_TEMPERATURE value '{}': expected a number between 0 and 2",
                    temp_str
                ),
            }
        }

        // ARCHAI_LAYOUT_COUNT
        if let Ok(count_str) = env::var("ARCHAI_LAYOUT_COUNT") {
            match parse_layout_count(&count_str) {
                Ok(count) => self.layout_count.update(count, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid ARCHAI_LAYOUT_COUNT value '{}': expected a positive integer",
                    count_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(model) = overrides.primary_model {
            self.primary_model.update(model, ConfigSource::Cli);
        }

        if let Some(model) = overrides.fallback_model {
            self.fallback_model.update(model, ConfigSource::Cli);
        }

        if let Some(temperature) = overrides.temperature {
            self.temperature.update(temperature, ConfigSource::Cli);
        }

        if let Some(count) = overrides.layout_count {
            self.layout_count.update(count, ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "primary_model".to_string(),
            (self.primary_model.value.clone(), self.primary_model.source),
        );

        map.insert(
            "fallback_model".to_string(),
            (self.fallback_model.value.clone(), self.fallback_model.source),
        );

        map.insert(
            "temperature".to_string(),
            (self.temperature.value.to_string(), self.temperature.source),
        );

        map.insert(
            "layout_count".to_string(),
            (self.layout_count.value.to_string(), self.layout_count.source),
        );

        map.insert(
            "currency".to_string(),
            (self.rates.value.currency.clone(), self.rates.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    primary_model: Option<String>,
    fallback_model: Option<String>,
    temperature: Option<f32>,
    layout_count: Option<u32>,
    rates: Option<MaterialRates>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub primary_model: Option<String>,
    pub fallback_model: Option<String>,
    pub temperature: Option<f32>,
    pub layout_count: Option<u32>,
}

/// Check that a sampling temperature lies in 0..=2
pub fn validate_temperature(t: f32) -> Result<f32> {
    if (0.0..=2.0).contains(&t) {
        Ok(t)
    } else {
        Err(invalid_temperature(t))
    }
}

/// Check that at least one layout is requested
pub fn validate_layout_count(n: u32) -> Result<u32> {
    if n >= 1 {
        Ok(n)
    } else {
        Err(invalid_layout_count(n))
    }
}

/// Parse a sampling temperature from string
pub fn parse_temperature(s: &str) -> Result<f32> {
    let t = s.trim().parse::<f32>().map_err(|_| invalid_temperature(s))?;
    validate_temperature(t)
}

/// Parse the number of layouts to request from string
pub fn parse_layout_count(s: &str) -> Result<u32> {
    let n = s.trim().parse::<u32>().map_err(|_| invalid_layout_count(s))?;
    validate_layout_count(n)
}

fn invalid_temperature(value: impl std::fmt::Display) -> ArchaiError {
    ArchaiError::ConfigInvalid {
        key: "temperature".to_string(),
        reason: format!("Invalid temperature: {}. Use a number between 0 and 2", value),
    }
}

fn invalid_layout_count(value: impl std::fmt::Display) -> ArchaiError {
    ArchaiError::ConfigInvalid {
        key: "layout_count".to_string(),
        reason: format!("Invalid layout count: {}. Use a positive integer", value),
    }
}
