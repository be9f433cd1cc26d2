//! Model output parsing
//!
//! Completions are free-form text. The JSON payload may be wrapped in a
//! Markdown fence (tagged `json` or bare) or surrounded by prose, so the
//! payload is isolated before it is decoded.

use archai_core::error::{ArchaiError, Result};
use archai_core::models::Layout;
use serde::Deserialize;

const FENCE: &str = "```";
const JSON_FENCE: &str = "```json";

/// Isolate the JSON payload inside a completion
///
/// A ```` ```json ```` fence wins over a bare fence. Whatever is left is then
/// narrowed to the span between the first `{` and the last `}`.
pub fn extract_json_payload(text: &str) -> &str {
    let fenced = if let Some((_, rest)) = text.split_once(JSON_FENCE) {
        until_fence(rest)
    } else if let Some((_, rest)) = text.split_once(FENCE) {
        until_fence(rest)
    } else {
        text
    };

    match (fenced.find('{'), fenced.rfind('}')) {
        (Some(start), Some(end)) if start < end => &fenced[start..=end],
        _ => fenced.trim(),
    }
}

fn until_fence(text: &str) -> &str {
    match text.split_once(FENCE) {
        Some((inner, _)) => inner,
        None => text,
    }
}

#[derive(Debug, Deserialize)]
struct GeneratedLayouts {
    #[serde(default)]
    layouts: Vec<Layout>,
}

/// Decode the layouts in a completion
///
/// A payload without a `layouts` key decodes to an empty list. Layouts the
/// model left unnamed are numbered in order.
pub fn parse_layouts(text: &str) -> Result<Vec<Layout>> {
    let payload = extract_json_payload(text);

    let value: serde_json::Value =
        serde_json::from_str(payload).map_err(|e| ArchaiError::MalformedModelOutput {
            reason: format!("Response is not valid JSON: {}", e),
        })?;

    if !value.is_object() {
        return Err(ArchaiError::MalformedModelOutput {
            reason: "Expected a JSON object with a \"layouts\" array".to_string(),
        });
    }

    let generated: GeneratedLayouts =
        serde_json::from_value(value).map_err(|e| ArchaiError::MalformedModelOutput {
            reason: format!("Unexpected layout structure: {}", e),
        })?;

    let mut layouts = generated.layouts;
    for (idx, layout) in layouts.iter_mut().enumerate() {
        if layout.name.trim().is_empty() {
            layout.name = format!("Layout {}", idx + 1);
        }
    }

    Ok(layouts)
}
