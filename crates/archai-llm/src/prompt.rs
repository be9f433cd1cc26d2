//! Prompt construction for floor-plan generation

use archai_core::models::ProjectConfig;
use serde_json::json;

/// System instruction sent to providers that accept one on the fallback path
pub const FALLBACK_SYSTEM_INSTRUCTION: &str =
    "You are an expert architectural AI. Always respond with valid JSON only.";

const RESPONSE_FORMAT: &str = r#"Return ONLY valid JSON in this exact format:
{
  "layouts": [
    {
      "name": "Layout Name",
      "description": "Brief description",
      "totalArea": 150.5,
      "rooms": [
        {"name": "Living Room", "x": 0, "y": 0, "width": 5, "height": 6, "area": 30}
      ]
    }
  ]
}"#;

const CONSIDERATIONS: &str = "Consider:
- Vastu/Cultural compliance if specified
- Proper room adjacencies
- Natural light and ventilation
- Building code setbacks";

/// Build the generation prompt for a project
pub fn build_prompt(config: &ProjectConfig, layout_count: u32) -> String {
    let site = &config.site_constraints;
    let rooms: Vec<_> = config
        .required_spaces
        .iter()
        .map(|room| json!({"name": room.name, "qty": room.quantity, "minArea": room.min_area}))
        .collect();

    let request = if layout_count == 1 {
        "Generate 1 floor plan layout".to_string()
    } else {
        format!("Generate {} different floor plan layouts", layout_count)
    };

    let mut prompt = format!(
        "You are an expert architectural AI. {} based on these requirements:\n\n\
         Project Type: {}\n\
         Site Dimensions: {} x {}\n\
         Required Rooms: {}\n\
         Cultural Preferences: {}\n\
         Municipal Code: {}\n",
        request,
        config.project_type,
        dimension(site.width),
        dimension(site.length),
        serde_json::Value::Array(rooms),
        config.cultural_type().unwrap_or("None"),
        config.municipal_code_or_default(),
    );

    if !config.adjacency_rules.is_empty() {
        let pairs: Vec<String> = config
            .adjacency_rules
            .iter()
            .map(|rule| {
                let relation = if rule.preferred { "next to" } else { "away from" };
                format!("{} {} {}", rule.room1, relation, rule.room2)
            })
            .collect();
        prompt.push_str(&format!("Adjacency Preferences: {}\n", pairs.join("; ")));
    }

    if !config.orientation.is_empty() {
        let facings: Vec<String> = config
            .orientation
            .iter()
            .map(|(room, facing)| format!("{} facing {}", room, facing))
            .collect();
        prompt.push_str(&format!("Orientation: {}\n", facings.join("; ")));
    }

    prompt.push_str(
        "\nFor each layout, provide:\n\
         1. Room positions (x, y, width, height in meters)\n\
         2. Room names and areas\n\
         3. Total built-up area\n\
         4. Brief description\n\n",
    );
    prompt.push_str(RESPONSE_FORMAT);
    prompt.push_str("\n\n");
    prompt.push_str(CONSIDERATIONS);
    prompt.push('\n');

    prompt
}

fn dimension(value: Option<f64>) -> String {
    value.map(|v| format!("{}m", v)).unwrap_or_else(|| "unspecified".to_string())
}
