//! Reading pipeline inputs from disk

use anyhow::{bail, Context, Result};
use archai_core::config::LayeredConfig;
use archai_core::models::{Layout, ProjectConfig};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load the layered configuration: defaults, optional file, then environment
pub fn load_config(path: Option<&Path>) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();
    if let Some(path) = path {
        config = config
            .load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    }
    Ok(config.load_from_env())
}

/// Read and validate a project configuration
pub fn load_project_config(path: &Path) -> Result<ProjectConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read project file {}", path.display()))?;
    let config: ProjectConfig = serde_json::from_str(&content)
        .with_context(|| format!("Invalid project configuration in {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// Read one layout from a file
///
/// The file may hold a single layout, an array of layouts (as written by
/// `generate`), or an object with a `layouts` array. `index` picks from the
/// latter two.
pub fn load_layout(path: &Path, index: usize) -> Result<Layout> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    let layout = match value {
        Value::Array(items) => pick(items, index, path)?,
        Value::Object(mut map) if map.contains_key("layouts") => match map.remove("layouts") {
            Some(Value::Array(items)) => pick(items, index, path)?,
            _ => bail!("'layouts' in {} is not an array", path.display()),
        },
        other => other,
    };

    serde_json::from_value(layout)
        .with_context(|| format!("Invalid layout in {}", path.display()))
}

fn pick(mut items: Vec<Value>, index: usize, path: &Path) -> Result<Value> {
    if index >= items.len() {
        bail!(
            "Layout index {} out of range: {} holds {} layouts",
            index,
            path.display(),
            items.len()
        );
    }
    Ok(items.swap_remove(index))
}
