//! Estimate command implementation

use crate::cli::EstimateArgs;
use crate::files::load_layout;
use crate::output::OutputWriter;
use crate::output_types::EstimateOutput;
use anyhow::Result;
use archai_core::config::LayeredConfig;
use archai_core::estimate::total_cost;
use archai_core::models::MaterialLine;
use archai_core::MaterialEstimator;
use tabled::Tabled;

#[derive(Tabled)]
struct MaterialRow {
    #[tabled(rename = "Material")]
    name: String,
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Unit")]
    unit: String,
    #[tabled(rename = "Cost")]
    cost: String,
}

pub fn execute(args: EstimateArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let layout = load_layout(&args.layout, args.selector.index)?;

    let estimator = MaterialEstimator::new(config.rates.value.clone());
    let materials = estimator.estimate(Some(&layout));
    let total = total_cost(&materials);
    let currency = estimator.rates().currency.clone();

    if output.is_json() {
        return output.result(EstimateOutput {
            layout: layout.name,
            currency,
            total_cost: total,
            materials,
        });
    }

    output.section(format!("Bill of Materials: {}", layout.name));
    output.kv("Built-up area", format!("{:.2} m²", layout.total_area));
    output.kv("Rate source", format!("{:?}", config.rates.source));
    output.table(materials.iter().map(|line| row(line, &currency)).collect());
    output.kv("Total", format!("{} {:.2}", currency, total));

    Ok(())
}

fn row(line: &MaterialLine, currency: &str) -> MaterialRow {
    MaterialRow {
        name: line.name.clone(),
        quantity: format!("{:.2}", line.quantity),
        unit: line.unit.clone(),
        cost: line
            .estimated_cost
            .map(|cost| format!("{} {:.2}", currency, cost))
            .unwrap_or_else(|| "-".to_string()),
    }
}
