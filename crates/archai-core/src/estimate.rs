//! Bill-of-quantities estimation
//!
//! Quantities are derived from the layout's total area and room count using
//! fixed coefficients. Only the unit costs are configurable, through
//! [`MaterialRates`].

use serde::{Deserialize, Serialize};

use crate::models::{Layout, MaterialLine};

/// Slab thickness in meters
const SLAB_THICKNESS: f64 = 0.15;

/// Assumed wall length per room, in meters
const WALL_LENGTH_PER_ROOM: f64 = 10.0;

/// Assumed wall height, in meters
const WALL_HEIGHT: f64 = 3.0;

const BRICKS_PER_M2: f64 = 50.0;
const STEEL_KG_PER_M2: f64 = 8.0;
const CEMENT_BAGS_PER_M2: f64 = 0.4;

/// Paintable surface (walls and ceiling) relative to floor area
const PAINT_SURFACE_FACTOR: f64 = 3.0;

/// Coverage of one liter of paint, in square meters
const PAINT_COVERAGE_M2: f64 = 12.0;

/// Doors beyond one per room (main and rear entrance)
const EXTRA_DOORS: f64 = 2.0;
const WINDOWS_PER_ROOM: f64 = 2.0;

/// Unit costs, all in the same currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialRates {
    /// Currency code the costs are expressed in
    pub currency: String,
    pub concrete_per_m3: f64,
    pub brick_per_unit: f64,
    pub steel_per_kg: f64,
    pub cement_per_bag: f64,
    pub tiles_per_m2: f64,
    pub paint_per_liter: f64,
    pub door_per_unit: f64,
    pub window_per_unit: f64,
}

impl Default for MaterialRates {
    fn default() -> Self {
        Self {
            currency: "INR".to_string(),
            concrete_per_m3: 5500.0,
            brick_per_unit: 8.0,
            steel_per_kg: 65.0,
            cement_per_bag: 450.0,
            tiles_per_m2: 450.0,
            paint_per_liter: 350.0,
            door_per_unit: 15000.0,
            window_per_unit: 8000.0,
        }
    }
}

/// Deterministic material estimator
#[derive(Debug, Clone, Default)]
pub struct MaterialEstimator {
    rates: MaterialRates,
}

impl MaterialEstimator {
    pub fn new(rates: MaterialRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &MaterialRates {
        &self.rates
    }

    /// Estimate materials for the selected layout; no layout means no lines
    pub fn estimate(&self, layout: Option<&Layout>) -> Vec<MaterialLine> {
        let Some(layout) = layout else {
            return Vec::new();
        };

        let area = layout.total_area;
        let rooms = layout.room_count() as f64;
        let rates = &self.rates;

        let wall_area = rooms * WALL_LENGTH_PER_ROOM * WALL_HEIGHT;
        let paint_liters = (area * PAINT_SURFACE_FACTOR) / PAINT_COVERAGE_M2;

        vec![
            MaterialLine::priced(
                "Ready-Mix Concrete (M25)",
                area * SLAB_THICKNESS,
                "m³",
                rates.concrete_per_m3,
            ),
            MaterialLine::priced(
                "Clay Bricks (Standard)",
                wall_area * BRICKS_PER_M2,
                "units",
                rates.brick_per_unit,
            ),
            MaterialLine::priced(
                "TMT Steel Bars (Fe500)",
                area * STEEL_KG_PER_M2,
                "kg",
                rates.steel_per_kg,
            ),
            MaterialLine::priced(
                "Cement (OPC 53 Grade)",
                area * CEMENT_BAGS_PER_M2,
                "bags",
                rates.cement_per_bag,
            ),
            MaterialLine::priced("Ceramic Floor Tiles (600x600mm)", area, "m²", rates.tiles_per_m2),
            MaterialLine::priced("Interior Emulsion Paint", paint_liters, "liters", rates.paint_per_liter),
            MaterialLine::priced(
                "Wooden Doors with Frame",
                rooms + EXTRA_DOORS,
                "units",
                rates.door_per_unit,
            ),
            MaterialLine::priced(
                "UPVC Windows with Glass",
                rooms * WINDOWS_PER_ROOM,
                "units",
                rates.window_per_unit,
            ),
        ]
    }
}

/// Sum of all priced lines
pub fn total_cost(lines: &[MaterialLine]) -> f64 {
    lines.iter().filter_map(|line| line.estimated_cost).sum()
}
