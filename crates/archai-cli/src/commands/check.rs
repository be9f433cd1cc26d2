//! Check command implementation

use crate::cli::CheckArgs;
use crate::files::{load_layout, load_project_config};
use crate::output::OutputWriter;
use crate::output_types::CheckOutput;
use anyhow::Result;
use archai_core::models::{ComplianceFinding, ComplianceStatus};
use archai_core::ComplianceEvaluator;
use console::style;
use tabled::Tabled;

#[derive(Tabled)]
struct FindingRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Rule")]
    rule: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Message")]
    message: String,
}

pub fn execute(args: CheckArgs, output: &OutputWriter) -> Result<()> {
    let config = load_project_config(&args.project)?;
    let layout = load_layout(&args.layout, args.selector.index)?;

    let findings = ComplianceEvaluator::default().evaluate(&config, Some(&layout));
    let count = |status: ComplianceStatus| findings.iter().filter(|f| f.status == status).count();
    let (passed, failed, warnings) = (
        count(ComplianceStatus::Passed),
        count(ComplianceStatus::Failed),
        count(ComplianceStatus::Warning),
    );

    if output.is_json() {
        return output.result(CheckOutput {
            layout: layout.name,
            passed,
            failed,
            warnings,
            findings,
        });
    }

    output.section(format!("Compliance: {}", layout.name));
    output.table(findings.iter().map(row).collect());

    let suggestions: Vec<&ComplianceFinding> =
        findings.iter().filter(|f| f.suggestion.is_some()).collect();
    if !suggestions.is_empty() {
        output.section("Suggestions");
        for finding in suggestions {
            if let Some(suggestion) = &finding.suggestion {
                output.kv(&finding.rule, suggestion);
            }
        }
    }

    println!();
    if failed == 0 {
        output.success(format!("{} passed, {} warnings", passed, warnings));
    } else {
        output.warning(format!("{} passed, {} failed, {} warnings", passed, failed, warnings));
    }

    Ok(())
}

fn row(finding: &ComplianceFinding) -> FindingRow {
    let status = match finding.status {
        ComplianceStatus::Passed => style(finding.status).green().to_string(),
        ComplianceStatus::Failed => style(finding.status).red().to_string(),
        ComplianceStatus::Warning => style(finding.status).yellow().to_string(),
    };

    FindingRow {
        category: finding.category.to_string(),
        rule: finding.rule.clone(),
        status,
        message: finding.message.clone(),
    }
}
