use serde::{Deserialize, Serialize};
use std::fmt;

/// Family of rules a finding belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceCategory {
    Regulatory,
    Cultural,
    Accessibility,
}

impl fmt::Display for ComplianceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ComplianceCategory::Regulatory => "regulatory",
            ComplianceCategory::Cultural => "cultural",
            ComplianceCategory::Accessibility => "accessibility",
        };
        f.write_str(label)
    }
}

/// Outcome of a single rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceStatus {
    Passed,
    Failed,
    Warning,
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ComplianceStatus::Passed => "passed",
            ComplianceStatus::Failed => "failed",
            ComplianceStatus::Warning => "warning",
        };
        f.write_str(label)
    }
}

/// One rule-evaluation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceFinding {
    pub category: ComplianceCategory,
    pub rule: String,
    pub status: ComplianceStatus,
    pub message: String,
    pub suggestion: Option<String>,
}

impl ComplianceFinding {
    pub fn passed(
        category: ComplianceCategory,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            rule: rule.into(),
            status: ComplianceStatus::Passed,
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn failed(
        category: ComplianceCategory,
        rule: impl Into<String>,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            category,
            rule: rule.into(),
            status: ComplianceStatus::Failed,
            message: message.into(),
            suggestion: Some(suggestion.into()),
        }
    }

    pub fn warning(
        category: ComplianceCategory,
        rule: impl Into<String>,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            category,
            rule: rule.into(),
            status: ComplianceStatus::Warning,
            message: message.into(),
            suggestion: Some(suggestion.into()),
        }
    }
}
