use archai_core::formats::BoundaryImport;
use archai_core::models::Project;

use super::plan::{load_project, store_error};
use crate::error::ApiError;
use crate::state::AppState;

/// Applies uploaded site drawings to projects
pub struct BoundaryService;

impl BoundaryService {
    /// Read the drawing and, when it parses, store its dimensions on the project
    ///
    /// A drawing that cannot be read is not an error: the `parsed: false`
    /// result is returned to the caller and the project is left untouched.
    pub async fn import(
        state: &AppState,
        project_id: &str,
        filename: &str,
        data: &[u8],
    ) -> Result<BoundaryImport, ApiError> {
        load_project(state, project_id).await?;

        let result = state.importer.import(data);

        if let Some((width, length)) = result.dimensions() {
            let file_name = filename.to_string();
            state
                .store
                .modify_project(
                    project_id,
                    Box::new(move |project: &mut Project| {
                        project
                            .config
                            .site_constraints
                            .apply_boundary(width, length, file_name);
                        project.touch();
                        Ok(())
                    }),
                )
                .await
                .map_err(|e| store_error(project_id, e))?;

            tracing::info!(
                project_id = %project_id,
                width = width,
                length = length,
                "Site dimensions updated from boundary drawing"
            );
        }

        Ok(result)
    }
}
