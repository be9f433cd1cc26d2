use serde::{Deserialize, Serialize};

/// One estimated quantity/cost entry in a bill of materials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialLine {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub estimated_cost: Option<f64>,
}

impl MaterialLine {
    /// Build a line whose cost is `quantity * unit_cost`
    pub fn priced(name: impl Into<String>, quantity: f64, unit: impl Into<String>, unit_cost: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            estimated_cost: Some(quantity * unit_cost),
        }
    }
}
