use archai_core::formats::BoundaryImport;
use archai_core::models::{ComplianceFinding, MaterialLine};
use serde::Serialize;

/// Output for render command
#[derive(Debug, Serialize)]
pub struct RenderOutput {
    pub layout: String,
    pub rooms: usize,
    pub width: f64,
    pub height: f64,
    /// Destination file, absent when the SVG went to stdout
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
}

/// Output for check command
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub layout: String,
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
    pub findings: Vec<ComplianceFinding>,
}

/// Output for estimate command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateOutput {
    pub layout: String,
    pub currency: String,
    pub total_cost: f64,
    pub materials: Vec<MaterialLine>,
}

/// Output for import command
#[derive(Debug, Serialize)]
pub struct ImportOutput {
    pub file: String,
    #[serde(flatten)]
    pub boundary: BoundaryImport,
}

/// Output for generate command
#[derive(Debug, Serialize)]
pub struct GenerateOutput {
    pub providers: Vec<String>,
    pub layouts: Vec<GeneratedLayoutInfo>,
    pub layouts_file: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedLayoutInfo {
    pub name: String,
    pub rooms: usize,
    pub total_area: f64,
    pub svg_file: String,
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub primary_model: ConfigEntry,
    pub fallback_model: ConfigEntry,
    pub temperature: ConfigEntry,
    pub layout_count: ConfigEntry,
    pub currency: ConfigEntry,
}

#[derive(Debug, Serialize)]
pub struct ConfigEntry {
    pub value: String,
    pub source: String,
}
