//! In-memory project store for development and testing.
//!
//! Projects are kept as JSON documents, the same shape a document database
//! would hold, so timestamps round-trip through ISO-8601 strings. The store
//! uses `RwLock::unwrap()` intentionally: lock poisoning only happens after
//! another thread panicked while holding the lock.

use async_trait::async_trait;
use archai_core::error::{ArchaiError, Result};
use archai_core::models::Project;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ports::{ProjectStore, ProjectUpdate};

/// In-memory implementation of ProjectStore
#[derive(Debug, Clone, Default)]
pub struct MemoryProjectStore {
    documents: Arc<RwLock<HashMap<String, Value>>>,
}

impl MemoryProjectStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored projects
    pub fn len(&self) -> usize {
        self.documents.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw stored document, as an external store would see it
    pub fn document(&self, id: &str) -> Option<Value> {
        self.documents.read().unwrap().get(id).cloned()
    }
}

fn to_document(project: &Project) -> Result<Value> {
    Ok(serde_json::to_value(project)?)
}

fn from_document(document: Value) -> Result<Project> {
    Ok(serde_json::from_value(document)?)
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    async fn create_project(&self, project: &Project) -> Result<()> {
        let document = to_document(project)?;
        self.documents
            .write()
            .unwrap()
            .insert(project.id.clone(), document);

        tracing::debug!(project_id = %project.id, "Stored project");
        Ok(())
    }

    async fn get_project(&self, id: &str) -> Result<Option<Project>> {
        let document = self.documents.read().unwrap().get(id).cloned();
        document.map(from_document).transpose()
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        let documents: Vec<Value> = self.documents.read().unwrap().values().cloned().collect();

        let mut projects = documents
            .into_iter()
            .map(from_document)
            .collect::<Result<Vec<_>>>()?;
        projects.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));

        Ok(projects)
    }

    async fn update_project(&self, project: &Project) -> Result<()> {
        let document = to_document(project)?;
        let mut documents = self.documents.write().unwrap();

        match documents.get_mut(&project.id) {
            Some(slot) => {
                *slot = document;
                Ok(())
            }
            None => Err(ArchaiError::ProjectNotFound {
                id: project.id.clone(),
            }),
        }
    }

    async fn modify_project<'a>(&self, id: &str, update: ProjectUpdate<'a>) -> Result<Project> {
        let mut documents = self.documents.write().unwrap();

        let document = documents
            .get(id)
            .cloned()
            .ok_or_else(|| ArchaiError::ProjectNotFound { id: id.to_string() })?;

        let mut project = from_document(document)?;
        update(&mut project)?;
        documents.insert(id.to_string(), to_document(&project)?);

        tracing::debug!(project_id = %id, "Modified project");
        Ok(project)
    }

    async fn delete_project(&self, id: &str) -> Result<bool> {
        let removed = self.documents.write().unwrap().remove(id).is_some();
        if removed {
            tracing::debug!(project_id = %id, "Deleted project");
        }
        Ok(removed)
    }
}
