use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::dto::{GenerateResponse, SuccessResponse};
use crate::error::ApiError;
use crate::services::PlanService;
use crate::state::AppState;

pub async fn generate_plans(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
) -> Result<Json<GenerateResponse>, ApiError> {
    tracing::info!(project_id = %project_id, "Generating floor plans");

    let outcome = PlanService::generate(&state, &project_id).await?;

    Ok(Json(GenerateResponse {
        success: true,
        floor_plans: outcome.layouts,
        compliance_checks: outcome.findings,
        materials: outcome.materials,
    }))
}

pub async fn select_plan(
    State(state): State<Arc<AppState>>,
    Path((project_id, plan_index)): Path<(String, usize)>,
) -> Result<Json<SuccessResponse>, ApiError> {
    tracing::info!(project_id = %project_id, plan_index = plan_index, "Selecting floor plan");

    PlanService::select(&state, &project_id, plan_index).await?;

    Ok(Json(SuccessResponse::ok()))
}
