//! ArchAI Core - Layout schema, rendering, compliance and estimation
//!
//! This crate contains the deterministic half of the floor-plan pipeline and the
//! shared domain models used by the generation, storage and API crates.

pub mod compliance;
pub mod config;
pub mod error;
pub mod estimate;
pub mod formats;
pub mod models;
pub mod render;

pub use compliance::ComplianceEvaluator;
pub use error::{ArchaiError, Result};
pub use estimate::{MaterialEstimator, MaterialRates};
pub use render::render_layout;
