use archai_core::error::Result;
use archai_core::models::Project;
use async_trait::async_trait;

/// Change applied to a stored project by [`ProjectStore::modify_project`]
pub type ProjectUpdate<'a> = Box<dyn FnOnce(&mut Project) -> Result<()> + Send + 'a>;

/// Port for project persistence
///
/// `update_project` is a whole-document, last-write-wins replace. Callers that
/// hold a project across a long await use `modify_project` instead, which
/// re-reads the stored document and applies the change atomically.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Store a new project
    async fn create_project(&self, project: &Project) -> Result<()>;

    /// Retrieve a project by ID
    async fn get_project(&self, id: &str) -> Result<Option<Project>>;

    /// List all projects, oldest first
    async fn list_projects(&self) -> Result<Vec<Project>>;

    /// Replace a stored project
    ///
    /// Fails with `ProjectNotFound` when no project has this ID.
    async fn update_project(&self, project: &Project) -> Result<()>;

    /// Apply `update` to the current stored version of a project
    ///
    /// The read, the change and the write happen as one step, so fields the
    /// update does not touch keep whatever value was stored last. When the
    /// update fails nothing is written. Returns the project as stored.
    async fn modify_project<'a>(&self, id: &str, update: ProjectUpdate<'a>) -> Result<Project>;

    /// Delete a project, returning whether it existed
    async fn delete_project(&self, id: &str) -> Result<bool>;
}
