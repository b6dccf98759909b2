//! Note Endpoints

use super::ApiClient;
use crate::error::ApiError;
use crate::forms::{id_body, NoteForm};
use crate::models::Note;

impl ApiClient {
    pub async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        self.get_json("/api/notes").await
    }

    pub async fn create_note(&self, form: &NoteForm) -> Result<(), ApiError> {
        self.post_form("/api/notes/create", &form.to_body()).await
    }

    pub async fn update_note(&self, form: &NoteForm) -> Result<(), ApiError> {
        self.post_form("/api/notes/update", &form.to_body()).await
    }

    pub async fn delete_note(&self, id: u32) -> Result<(), ApiError> {
        self.post_form("/api/notes/delete", &id_body(id)).await
    }
}
