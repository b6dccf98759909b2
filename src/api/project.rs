//! Project Endpoints

use super::ApiClient;
use crate::error::ApiError;
use crate::forms::{id_body, ProjectForm};
use crate::models::Project;

impl ApiClient {
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get_json("/api/projects").await
    }

    pub async fn create_project(&self, form: &ProjectForm) -> Result<(), ApiError> {
        self.post_form("/api/projects/create", &form.to_body()).await
    }

    pub async fn update_project(&self, form: &ProjectForm) -> Result<(), ApiError> {
        self.post_form("/api/projects/update", &form.to_body()).await
    }

    /// Tasks of a deleted project are unlinked server-side, not removed.
    pub async fn delete_project(&self, id: u32) -> Result<(), ApiError> {
        self.post_form("/api/projects/delete", &id_body(id)).await
    }
}
