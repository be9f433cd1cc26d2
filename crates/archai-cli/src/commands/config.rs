//! Config command implementation

use crate::output::OutputWriter;
use crate::output_types::{ConfigEntry, ConfigOutput};
use anyhow::Result;
use archai_core::config::{ConfigSource, LayeredConfig};
use std::collections::HashMap;
use tabled::Tabled;

const KEYS: [&str; 5] = [
    "primary_model",
    "fallback_model",
    "temperature",
    "layout_count",
    "currency",
];

#[derive(Tabled)]
struct ConfigRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Source")]
    source: String,
}

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let map = config.to_inspection_map();

    if output.is_json() {
        return output.result(ConfigOutput {
            primary_model: entry(&map, "primary_model"),
            fallback_model: entry(&map, "fallback_model"),
            temperature: entry(&map, "temperature"),
            layout_count: entry(&map, "layout_count"),
            currency: entry(&map, "currency"),
        });
    }

    output.section("Configuration Values");
    output.table(
        KEYS.iter()
            .map(|key| {
                let ConfigEntry { value, source } = entry(&map, key);
                ConfigRow {
                    key: key.to_string(),
                    value,
                    source,
                }
            })
            .collect(),
    );

    output.section("Provider Keys");
    for var in ["GEMINI_API_KEY", "OPENAI_API_KEY"] {
        let status = match std::env::var(var) {
            Ok(value) if !value.trim().is_empty() => "set",
            _ => "not set",
        };
        output.kv(var, status);
    }

    Ok(())
}

fn entry(map: &HashMap<String, (String, ConfigSource)>, key: &str) -> ConfigEntry {
    map.get(key)
        .map(|(value, source)| ConfigEntry {
            value: value.clone(),
            source: format!("{:?}", source),
        })
        .unwrap_or(ConfigEntry {
            value: String::new(),
            source: "Default".to_string(),
        })
}
