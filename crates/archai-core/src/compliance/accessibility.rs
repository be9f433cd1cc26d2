use super::RuleSet;
use crate::models::{ComplianceCategory, ComplianceFinding, Layout, ProjectConfig};

/// Doorway width check
///
/// Doorways are not part of the generated geometry yet, so the width is an
/// assumed value rather than one measured from the layout.
#[derive(Debug, Clone)]
pub struct AccessibilityRules {
    /// Assumed doorway width in meters
    pub doorway_width: f64,

    /// Minimum acceptable doorway width in meters
    pub min_doorway_width: f64,
}

impl Default for AccessibilityRules {
    fn default() -> Self {
        Self {
            doorway_width: 0.9,
            min_doorway_width: 0.85,
        }
    }
}

impl RuleSet for AccessibilityRules {
    fn name(&self) -> &str {
        "accessibility"
    }

    fn category(&self) -> ComplianceCategory {
        ComplianceCategory::Accessibility
    }

    fn evaluate(&self, _config: &ProjectConfig, _layout: &Layout) -> Vec<ComplianceFinding> {
        let finding = if self.doorway_width >= self.min_doorway_width {
            ComplianceFinding::passed(
                ComplianceCategory::Accessibility,
                "Doorway Width (ADA)",
                format!(
                    "All doorways are {}m wide (minimum {}m)",
                    self.doorway_width, self.min_doorway_width
                ),
            )
        } else {
            ComplianceFinding::warning(
                ComplianceCategory::Accessibility,
                "Doorway Width (ADA)",
                format!(
                    "Some doorways are {}m ({}m recommended)",
                    self.doorway_width, self.min_doorway_width
                ),
                "Consider widening doorways for accessibility",
            )
        };

        vec![finding]
    }
}
