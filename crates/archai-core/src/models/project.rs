use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ComplianceFinding, Layout, MaterialLine};
use crate::error::{ArchaiError, Result};

/// A required room type and how many of it the project needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSpec {
    pub name: String,
    pub quantity: u32,
    #[serde(default)]
    pub min_area: Option<f64>,
}

/// Site boundary information, in meters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConstraints {
    #[serde(default)]
    pub width: Option<f64>,

    #[serde(default)]
    pub length: Option<f64>,

    /// Free-form dimension text entered by the user
    #[serde(default)]
    pub dimensions: Option<String>,

    /// Name of the imported boundary drawing, if any
    #[serde(default)]
    pub file_name: Option<String>,
}

impl SiteConstraints {
    /// Record the bounding box extracted from an uploaded boundary drawing
    pub fn apply_boundary(&mut self, width: f64, length: f64, file_name: impl Into<String>) {
        self.width = Some(width);
        self.length = Some(length);
        self.file_name = Some(file_name.into());
    }
}

/// Preferred (or discouraged) adjacency between two rooms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjacencyRule {
    pub room1: String,
    pub room2: String,
    #[serde(default = "default_preferred")]
    pub preferred: bool,
}

fn default_preferred() -> bool {
    true
}

/// Cultural design tradition, e.g. `vastu_north` or `islamic`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CulturalParameters {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub preferences: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Everything a user supplies to describe the project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub project_type: String,
    pub site_constraints: SiteConstraints,
    pub required_spaces: Vec<RoomSpec>,

    #[serde(default)]
    pub adjacency_rules: Vec<AdjacencyRule>,

    #[serde(default)]
    pub orientation: BTreeMap<String, String>,

    #[serde(default)]
    pub cultural_params: Option<CulturalParameters>,

    #[serde(default)]
    pub municipal_code: Option<String>,
}

impl ProjectConfig {
    pub fn new(project_type: impl Into<String>, required_spaces: Vec<RoomSpec>) -> Self {
        Self {
            project_type: project_type.into(),
            site_constraints: SiteConstraints::default(),
            required_spaces,
            adjacency_rules: Vec::new(),
            orientation: BTreeMap::new(),
            cultural_params: None,
            municipal_code: None,
        }
    }

    /// Cultural tradition tag, if one was chosen
    pub fn cultural_type(&self) -> Option<&str> {
        self.cultural_params.as_ref().and_then(|c| c.kind.as_deref())
    }

    /// Municipal code, or the generic label when unset
    pub fn municipal_code_or_default(&self) -> &str {
        self.municipal_code.as_deref().unwrap_or("General")
    }

    /// Check quantity and site dimension invariants
    pub fn validate(&self) -> Result<()> {
        for (idx, space) in self.required_spaces.iter().enumerate() {
            if space.name.trim().is_empty() {
                return Err(ArchaiError::InvalidConfig {
                    field: format!("requiredSpaces[{}].name", idx),
                    reason: "room name must not be empty".to_string(),
                });
            }

            if space.quantity < 1 {
                return Err(ArchaiError::InvalidConfig {
                    field: format!("requiredSpaces[{}].quantity", idx),
                    reason: format!("quantity for '{}' must be at least 1", space.name),
                });
            }

            if let Some(min_area) = space.min_area {
                check_positive(&format!("requiredSpaces[{}].minArea", idx), min_area)?;
            }
        }

        if let Some(width) = self.site_constraints.width {
            check_positive("siteConstraints.width", width)?;
        }

        if let Some(length) = self.site_constraints.length {
            check_positive("siteConstraints.length", length)?;
        }

        Ok(())
    }
}

fn check_positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ArchaiError::InvalidConfig {
            field: field.to_string(),
            reason: format!("expected a positive number, got {}", value),
        })
    }
}

/// Top-level aggregate persisted by the record store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub config: ProjectConfig,

    #[serde(rename = "floorPlans", default)]
    pub layouts: Vec<Layout>,

    #[serde(rename = "selectedPlanIndex", default)]
    pub selected_index: usize,

    #[serde(default)]
    pub compliance_checks: Vec<ComplianceFinding>,

    #[serde(default)]
    pub materials: Vec<MaterialLine>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a project with a fresh UUID and no generated artifacts
    pub fn new(name: impl Into<String>, config: ProjectConfig) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            config,
            layouts: Vec::new(),
            selected_index: 0,
            compliance_checks: Vec::new(),
            materials: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The currently selected layout, if any has been generated
    pub fn selected_layout(&self) -> Option<&Layout> {
        self.layouts.get(self.selected_index)
    }

    /// Point the selection at another layout
    ///
    /// Any index is accepted while there are no layouts, since the pointer is
    /// meaningless until generation has run.
    pub fn select_layout(&mut self, index: usize) -> Result<()> {
        if !self.layouts.is_empty() && index >= self.layouts.len() {
            return Err(ArchaiError::InvalidLayoutReference {
                index,
                len: self.layouts.len(),
            });
        }
        self.selected_index = index;
        Ok(())
    }

    /// Replace all layouts and reset the selection to the first one
    pub fn replace_layouts(&mut self, layouts: Vec<Layout>) {
        self.layouts = layouts;
        self.selected_index = 0;
    }

    /// Replace compliance findings and materials wholesale
    pub fn replace_derived(&mut self, findings: Vec<ComplianceFinding>, materials: Vec<MaterialLine>) {
        self.compliance_checks = findings;
        self.materials = materials;
    }

    /// Bump the last-update timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
