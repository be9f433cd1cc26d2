use archai_core::models::ProjectConfig;
use serde::Deserialize;

/// Create project request body
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub config: ProjectConfig,
}
