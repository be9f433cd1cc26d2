use archai_core::models::{ComplianceFinding, Layout, MaterialLine, Project};
use archai_core::{ComplianceEvaluator, MaterialEstimator};

use crate::error::ApiError;
use crate::state::AppState;

/// Layouts and derived artifacts produced by one generation run
pub struct GenerateOutcome {
    pub layouts: Vec<Layout>,
    pub findings: Vec<ComplianceFinding>,
    pub materials: Vec<MaterialLine>,
}

/// Orchestrates generation, evaluation and persistence for a project
pub struct PlanService;

impl PlanService {
    /// Generate layouts, evaluate the first one and persist everything
    ///
    /// Only the generated fields are written back. Changes stored while the
    /// providers were running (a boundary upload, say) are kept.
    pub async fn generate(state: &AppState, project_id: &str) -> Result<GenerateOutcome, ApiError> {
        let project = load_project(state, project_id).await?;

        let layouts = state.generator.generate(&project.config).await.map_err(|e| {
            tracing::error!(project_id = %project_id, error = ?e, "Floor plan generation failed");
            ApiError::from(e)
        })?;

        let (evaluator, estimator) = (&state.evaluator, &state.estimator);
        let project = state
            .store
            .modify_project(
                project_id,
                Box::new(move |project: &mut Project| {
                    project.replace_layouts(layouts);
                    refresh_derived(evaluator, estimator, project);
                    project.touch();
                    Ok(())
                }),
            )
            .await
            .map_err(|e| store_error(project_id, e))?;

        tracing::info!(
            project_id = %project_id,
            layouts = project.layouts.len(),
            findings = project.compliance_checks.len(),
            "Floor plans generated"
        );

        Ok(GenerateOutcome {
            layouts: project.layouts,
            findings: project.compliance_checks,
            materials: project.materials,
        })
    }

    /// Point the project at another layout and recompute its evaluation
    pub async fn select(state: &AppState, project_id: &str, index: usize) -> Result<(), ApiError> {
        let (evaluator, estimator) = (&state.evaluator, &state.estimator);

        state
            .store
            .modify_project(
                project_id,
                Box::new(move |project: &mut Project| {
                    project.select_layout(index)?;
                    refresh_derived(evaluator, estimator, project);
                    project.touch();
                    Ok(())
                }),
            )
            .await
            .map_err(|e| store_error(project_id, e))?;

        Ok(())
    }
}

/// Replace findings and materials wholesale for the selected layout
fn refresh_derived(evaluator: &ComplianceEvaluator, estimator: &MaterialEstimator, project: &mut Project) {
    let layout = project.selected_layout();
    let findings = evaluator.evaluate(&project.config, layout);
    let materials = estimator.estimate(layout);
    project.replace_derived(findings, materials);
}

pub(crate) async fn load_project(state: &AppState, project_id: &str) -> Result<Project, ApiError> {
    state
        .store
        .get_project(project_id)
        .await
        .map_err(|e| {
            tracing::error!(project_id = %project_id, error = %e, "Failed to load project");
            ApiError::internal("Failed to load project").with_details(e.to_string())
        })?
        .ok_or_else(|| ApiError::not_found("Project not found"))
}

pub(crate) fn store_error(project_id: &str, e: archai_core::ArchaiError) -> ApiError {
    tracing::error!(project_id = %project_id, error = %e, "Failed to update project");
    ApiError::from(e)
}
