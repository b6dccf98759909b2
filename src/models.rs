//! Frontend Models
//!
//! Data structures matching the backend's JSON records.

use serde::{Deserialize, Deserializer, Serialize};

/// Task priority. The backend stores free text; an empty value means medium.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    /// Anything else the backend hands us, kept verbatim so updates send it back unchanged
    Other(String),
}

impl Priority {
    /// Values the task form offers
    pub const CHOICES: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Other(s) => s,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Other(s) => s.trim(),
        }
    }

    /// Exact match on the canonical values; anything else is kept as-is.
    pub fn parse(value: &str) -> Self {
        match value {
            "" | "medium" => Priority::Medium,
            "low" => Priority::Low,
            "high" => Priority::High,
            other => Priority::Other(other.to_string()),
        }
    }
}

impl Serialize for Priority {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|s| Priority::parse(&s)).unwrap_or_default())
    }
}

/// Task record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub done: bool,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub due_date: Option<String>,
    #[serde(default)]
    pub project_id: Option<u32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub project_name: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub created_at: Option<String>,
}

/// Project lifecycle status
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProjectStatus {
    #[default]
    Active,
    Planning,
    Completed,
    Paused,
    Cancelled,
    /// Anything else the backend hands us, kept verbatim
    Other(String),
}

impl ProjectStatus {
    pub const CHOICES: [ProjectStatus; 5] = [
        ProjectStatus::Active,
        ProjectStatus::Planning,
        ProjectStatus::Completed,
        ProjectStatus::Paused,
        ProjectStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Planning => "planning",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Paused => "paused",
            ProjectStatus::Cancelled => "cancelled",
            ProjectStatus::Other(s) => s,
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "active" => ProjectStatus::Active,
            "planning" => ProjectStatus::Planning,
            "completed" => ProjectStatus::Completed,
            "paused" => ProjectStatus::Paused,
            "cancelled" => ProjectStatus::Cancelled,
            _ => ProjectStatus::Other(value.trim().to_string()),
        }
    }
}

impl Serialize for ProjectStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProjectStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|s| ProjectStatus::parse(&s)).unwrap_or_default())
    }
}

/// Project record (matches backend; task counts are derived server-side)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub progress: u32,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub due_date: Option<String>,
    #[serde(default)]
    pub team_members: u32,
    #[serde(default)]
    pub task_count: u32,
    #[serde(default)]
    pub completed_tasks: u32,
}

/// Note record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub created_at: Option<String>,
}

/// Aggregates computed by the backend's `/api/analytics`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Analytics {
    #[serde(default)]
    pub total_tasks: u32,
    #[serde(default)]
    pub completed_tasks: u32,
    #[serde(default)]
    pub pending_tasks: Option<u32>,
    #[serde(default)]
    pub high_priority_tasks: u32,
    #[serde(default)]
    pub total_projects: u32,
    #[serde(default)]
    pub active_projects: u32,
    #[serde(default)]
    pub completion_rate: f64,
}

impl Analytics {
    /// Pending count, derived as total - completed when the backend leaves it out.
    pub fn pending(&self) -> u32 {
        self.pending_tasks
            .unwrap_or_else(|| self.total_tasks.saturating_sub(self.completed_tasks))
    }
}

/// Remote data as held by the store
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Loadable<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }
}

fn empty_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_decodes_backend_shape() {
        let json = r#"{"id":7,"user_id":1,"project_id":3,"description":"Ship it",
            "priority":"high","done":true,"due_date":"2024-05-01",
            "created_at":"2024-04-01 10:00:00","project_name":"Launch"}"#;
        let task: Task = serde_json::from_str(json).unwrap();

        assert_eq!(task.id, 7);
        assert_eq!(task.priority, Priority::High);
        assert!(task.done);
        assert_eq!(task.project_id, Some(3));
        assert_eq!(task.due_date.as_deref(), Some("2024-05-01"));
        assert_eq!(task.project_name.as_deref(), Some("Launch"));
    }

    #[test]
    fn test_task_defaults_for_missing_fields() {
        let task: Task = serde_json::from_str(r#"{"id":1,"description":"x","priority":"","due_date":""}"#).unwrap();
        assert_eq!(task.priority, Priority::Medium);
        assert!(!task.done);
        assert_eq!(task.due_date, None);
        assert_eq!(task.project_id, None);
    }

    #[test]
    fn test_priority_keeps_unknown_values() {
        let task: Task =
            serde_json::from_str(r#"{"id":1,"description":"x","priority":"Urgent "}"#).unwrap();
        assert_eq!(task.priority, Priority::Other("Urgent ".into()));
        assert_eq!(task.priority.as_str(), "Urgent ");
        assert_eq!(task.priority.label(), "Urgent");
        assert_eq!(Priority::parse("low"), Priority::Low);
        assert_eq!(Priority::parse("HIGH"), Priority::Other("HIGH".into()));
    }

    #[test]
    fn test_project_status_keeps_unknown_values() {
        let json = r#"{"id":2,"name":"P","description":"","status":"archived","progress":40,
            "team_members":3,"task_count":5,"completed_tasks":2}"#;
        let project: Project = serde_json::from_str(json).unwrap();

        assert_eq!(project.status, ProjectStatus::Other("archived".into()));
        assert_eq!(project.status.as_str(), "archived");
        assert_eq!(project.description, None);
        assert_eq!(ProjectStatus::parse("Planning"), ProjectStatus::Planning);
    }

    #[test]
    fn test_pending_derived_when_missing() {
        let analytics: Analytics =
            serde_json::from_str(r#"{"total_tasks":10,"completed_tasks":4,"completion_rate":40.0}"#).unwrap();
        assert_eq!(analytics.pending(), 6);

        let with_pending: Analytics =
            serde_json::from_str(r#"{"total_tasks":10,"completed_tasks":4,"pending_tasks":5}"#).unwrap();
        assert_eq!(with_pending.pending(), 5);

        let inconsistent = Analytics { total_tasks: 1, completed_tasks: 3, ..Default::default() };
        assert_eq!(inconsistent.pending(), 0);
    }
}
