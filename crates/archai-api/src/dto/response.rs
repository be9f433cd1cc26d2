use archai_core::models::{ComplianceFinding, Layout, MaterialLine};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok",
            service: "archai-api",
        }
    }
}

/// API root banner
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

impl Default for RootResponse {
    fn default() -> Self {
        Self {
            message: "ArchAI Backend API",
        }
    }
}

/// Acknowledgement for mutations that return no payload
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Floor-plan generation response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub floor_plans: Vec<Layout>,
    pub compliance_checks: Vec<ComplianceFinding>,
    pub materials: Vec<MaterialLine>,
}
