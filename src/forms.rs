//! Form Payloads
//!
//! `application/x-www-form-urlencoded` bodies for the backend's POST endpoints.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::{Note, Priority, Project, ProjectStatus, Task};

/// Everything but the characters the urlencoded serializer leaves alone
const FORM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'*');

/// Ordered key/value pairs for a form POST
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormBody {
    pairs: Vec<(&'static str, String)>,
}

impl FormBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.pairs.push((key, value.into()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, utf8_percent_encode(v, FORM_ENCODE_SET)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Body carrying only the record id (delete endpoints)
pub fn id_body(id: u32) -> FormBody {
    FormBody::new().field("id", id.to_string())
}

// ========================
// Tasks
// ========================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskForm {
    pub id: Option<u32>,
    pub description: String,
    pub priority: Priority,
    pub done: bool,
    pub due_date: Option<String>,
    pub project_id: Option<u32>,
}

impl TaskForm {
    /// Pre-filled from an existing task so untouched fields are sent back unchanged.
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: Some(task.id),
            description: task.description.clone(),
            priority: task.priority.clone(),
            done: task.done,
            due_date: task.due_date.clone(),
            project_id: task.project_id,
        }
    }

    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.description.trim().is_empty() {
            return Err("Description is required");
        }
        Ok(())
    }

    pub fn to_body(&self) -> FormBody {
        let mut body = FormBody::new();
        if let Some(id) = self.id {
            body = body.field("id", id.to_string());
        }
        body.field("description", self.description.clone())
            .field("priority", self.priority.as_str().to_string())
            .field("done", if self.done { "on" } else { "" })
            .field("due_date", self.due_date.clone().unwrap_or_default())
            .field("project_id", self.project_id.map(|p| p.to_string()).unwrap_or_default())
    }
}

// ========================
// Projects
// ========================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectForm {
    pub id: Option<u32>,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub due_date: Option<String>,
    pub team_members: u32,
}

impl ProjectForm {
    pub fn from_project(project: &Project) -> Self {
        Self {
            id: Some(project.id),
            name: project.name.clone(),
            description: project.description.clone().unwrap_or_default(),
            status: project.status.clone(),
            due_date: project.due_date.clone(),
            team_members: project.team_members,
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Project name is required");
        }
        Ok(())
    }

    pub fn to_body(&self) -> FormBody {
        let mut body = FormBody::new();
        if let Some(id) = self.id {
            body = body.field("id", id.to_string());
        }
        body.field("name", self.name.trim())
            .field("description", self.description.clone())
            .field("status", self.status.as_str())
            .field("due_date", self.due_date.clone().unwrap_or_default())
            .field("team_members", self.team_members.to_string())
    }
}

// ========================
// Notes
// ========================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NoteForm {
    pub id: Option<u32>,
    pub title: String,
    pub content: String,
}

impl NoteForm {
    pub fn from_note(note: &Note) -> Self {
        Self {
            id: Some(note.id),
            title: note.title.clone(),
            content: note.content.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("Note title is required");
        }
        Ok(())
    }

    pub fn to_body(&self) -> FormBody {
        let mut body = FormBody::new();
        if let Some(id) = self.id {
            body = body.field("id", id.to_string());
        }
        body.field("title", self.title.trim()).field("content", self.content.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> Task {
        Task {
            id: 4,
            description: "Write report & send".to_string(),
            priority: Priority::High,
            done: false,
            due_date: Some("2024-06-01".to_string()),
            project_id: Some(9),
            project_name: None,
            created_at: None,
        }
    }

    #[test]
    fn test_encode_escapes_reserved_chars() {
        let body = FormBody::new().field("title", "a b&c=d/é").field("content", "");
        assert_eq!(body.encode(), "title=a%20b%26c%3Dd%2F%C3%A9&content=");
    }

    #[test]
    fn test_toggle_preserves_other_fields() {
        let body = TaskForm::from_task(&task()).with_done(true).to_body();

        assert_eq!(body.get("id"), Some("4"));
        assert_eq!(body.get("description"), Some("Write report & send"));
        assert_eq!(body.get("priority"), Some("high"));
        assert_eq!(body.get("done"), Some("on"));
        assert_eq!(body.get("due_date"), Some("2024-06-01"));
        assert_eq!(body.get("project_id"), Some("9"));

        let undone = TaskForm::from_task(&Task { done: true, ..task() }).with_done(false).to_body();
        assert_eq!(undone.get("done"), Some(""));
    }

    #[test]
    fn test_toggle_sends_stored_text_verbatim() {
        let task: Task = serde_json::from_str(
            r#"{"id":1,"description":"  Call Bob ","priority":"urgent","done":false}"#,
        )
        .unwrap();
        let body = TaskForm::from_task(&task).with_done(true).to_body();

        assert_eq!(body.get("description"), Some("  Call Bob "));
        assert_eq!(body.get("priority"), Some("urgent"));
        assert_eq!(body.get("done"), Some("on"));
    }

    #[test]
    fn test_create_task_has_no_id() {
        let form = TaskForm { description: "New".into(), ..Default::default() };
        let body = form.to_body();
        assert_eq!(body.get("id"), None);
        assert_eq!(
            body.encode(),
            "description=New&priority=medium&done=&due_date=&project_id="
        );
    }

    #[test]
    fn test_validation() {
        assert!(TaskForm::default().validate().is_err());
        assert!(ProjectForm { name: " ".into(), ..Default::default() }.validate().is_err());
        assert!(NoteForm { title: "Idea".into(), ..Default::default() }.validate().is_ok());
    }

    #[test]
    fn test_project_body() {
        let form = ProjectForm {
            id: Some(3),
            name: "Website".into(),
            description: "Relaunch".into(),
            status: ProjectStatus::Paused,
            due_date: None,
            team_members: 4,
        };
        assert_eq!(
            form.to_body().encode(),
            "id=3&name=Website&description=Relaunch&status=paused&due_date=&team_members=4"
        );
    }

    #[test]
    fn test_note_and_id_bodies() {
        let note = Note {
            id: 5,
            title: "Todo".into(),
            content: "line 1\nline 2".into(),
            updated_at: String::new(),
            created_at: None,
        };
        assert_eq!(NoteForm::from_note(&note).to_body().encode(), "id=5&title=Todo&content=line%201%0Aline%202");
        assert_eq!(id_body(12).encode(), "id=12");
    }
}
