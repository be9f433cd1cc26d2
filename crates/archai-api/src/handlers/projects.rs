use std::sync::Arc;

use archai_core::models::Project;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::dto::{CreateProjectRequest, SuccessResponse};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn create_project(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    tracing::info!(
        name = %request.name,
        project_type = %request.config.project_type,
        rooms = request.config.required_spaces.len(),
        "Creating project"
    );

    if request.name.trim().is_empty() {
        return Err(ApiError::bad_request("Project name must not be empty"));
    }
    request.config.validate()?;

    let project = Project::new(request.name, request.config);

    state.store.create_project(&project).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to create project");
        ApiError::internal("Failed to create project").with_details(e.to_string())
    })?;

    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn list_projects(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Project>>, ApiError> {
    tracing::info!("Listing projects");

    let projects = state.store.list_projects().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to list projects");
        ApiError::internal("Failed to list projects").with_details(e.to_string())
    })?;

    Ok(Json(projects))
}

pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
) -> Result<Json<Project>, ApiError> {
    let project = state
        .store
        .get_project(&project_id)
        .await
        .map_err(|e| {
            tracing::error!(project_id = %project_id, error = %e, "Failed to get project");
            ApiError::internal("Failed to get project").with_details(e.to_string())
        })?
        .ok_or_else(|| ApiError::not_found("Project not found"))?;

    Ok(Json(project))
}

pub async fn delete_project(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    tracing::info!(project_id = %project_id, "Deleting project");

    let deleted = state.store.delete_project(&project_id).await.map_err(|e| {
        tracing::error!(project_id = %project_id, error = %e, "Failed to delete project");
        ApiError::internal("Failed to delete project").with_details(e.to_string())
    })?;

    if !deleted {
        return Err(ApiError::not_found("Project not found"));
    }

    Ok(Json(SuccessResponse::ok()))
}
