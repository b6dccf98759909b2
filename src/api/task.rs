//! Task Endpoints

use super::ApiClient;
use crate::error::ApiError;
use crate::forms::{id_body, TaskForm};
use crate::models::Task;

impl ApiClient {
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.get_json("/api/tasks").await
    }

    pub async fn create_task(&self, form: &TaskForm) -> Result<(), ApiError> {
        self.post_form("/createtasks", &form.to_body()).await
    }

    /// Full overwrite on the backend: every field in `form` is persisted.
    pub async fn update_task(&self, form: &TaskForm) -> Result<(), ApiError> {
        self.post_form("/updatetasks", &form.to_body()).await
    }

    pub async fn delete_task(&self, id: u32) -> Result<(), ApiError> {
        self.post_form("/deletetasks", &id_body(id)).await
    }
}
