//! Rule-based compliance evaluation
//!
//! Each rule family implements [`RuleSet`]. The [`ComplianceEvaluator`] keeps
//! an ordered registry of rule sets and concatenates their findings, so new
//! traditions or codes are added by registering another rule set.

mod accessibility;
mod cultural;
mod regulatory;

pub use accessibility::AccessibilityRules;
pub use cultural::VastuRules;
pub use regulatory::RegulatoryRules;

use crate::models::{ComplianceCategory, ComplianceFinding, Layout, ProjectConfig};

/// A family of compliance rules
pub trait RuleSet: Send + Sync {
    /// Human-readable rule set name (e.g., "vastu")
    fn name(&self) -> &str;

    /// Category assigned to every finding this rule set produces
    fn category(&self) -> ComplianceCategory;

    /// Evaluate the layout against the project configuration
    fn evaluate(&self, config: &ProjectConfig, layout: &Layout) -> Vec<ComplianceFinding>;
}

/// Ordered registry of rule sets
pub struct ComplianceEvaluator {
    rules: Vec<Box<dyn RuleSet>>,
}

impl Default for ComplianceEvaluator {
    fn default() -> Self {
        let mut evaluator = Self::empty();
        evaluator.register(Box::new(RegulatoryRules::default()));
        evaluator.register(Box::new(VastuRules));
        evaluator.register(Box::new(AccessibilityRules::default()));
        evaluator
    }
}

impl ComplianceEvaluator {
    /// Create an evaluator with no rule sets registered
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule set; it runs after every rule set registered before it
    pub fn register(&mut self, rules: Box<dyn RuleSet>) {
        self.rules.push(rules);
    }

    /// Names of registered rule sets, in evaluation order
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Evaluate the selected layout; no layout means no findings
    pub fn evaluate(&self, config: &ProjectConfig, layout: Option<&Layout>) -> Vec<ComplianceFinding> {
        let Some(layout) = layout else {
            return Vec::new();
        };

        self.rules.iter().flat_map(|rules| rules.evaluate(config, layout)).collect()
    }
}
