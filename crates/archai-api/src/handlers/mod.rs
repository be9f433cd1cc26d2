mod health;
mod plans;
mod projects;
mod upload;

pub use health::{health_check, root};
pub use plans::{generate_plans, select_plan};
pub use projects::{create_project, delete_project, get_project, list_projects};
pub use upload::upload_boundary;
