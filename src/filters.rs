//! List Filters
//!
//! Filter-button and search-box selection over loaded collections.

use crate::models::{Project, ProjectStatus, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Pending, TaskFilter::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Pending => "Pending",
            TaskFilter::Completed => "Completed",
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Pending => !task.done,
            TaskFilter::Completed => task.done,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 3] = [ProjectFilter::All, ProjectFilter::Active, ProjectFilter::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Active => "Active",
            ProjectFilter::Completed => "Completed",
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Active => project.status == ProjectStatus::Active,
            ProjectFilter::Completed => project.status == ProjectStatus::Completed,
        }
    }
}

/// Analytics card range toggle; the backend serves one aggregate, so only the
/// active state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalyticsRange {
    Week,
    #[default]
    Month,
}

impl AnalyticsRange {
    pub const ALL: [AnalyticsRange; 2] = [AnalyticsRange::Week, AnalyticsRange::Month];

    pub fn label(&self) -> &'static str {
        match self {
            AnalyticsRange::Week => "Week",
            AnalyticsRange::Month => "Month",
        }
    }
}

/// Case-insensitive substring match on the description; blank query matches all.
pub fn matches_search(task: &Task, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || task.description.to_lowercase().contains(&query.to_lowercase())
}

pub fn visible_tasks<'a>(tasks: &'a [Task], filter: TaskFilter, query: &str) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| filter.matches(t) && matches_search(t, query))
        .collect()
}

pub fn visible_projects(projects: &[Project], filter: ProjectFilter) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn task(id: u32, description: &str, done: bool) -> Task {
        Task {
            id,
            description: description.to_string(),
            priority: Priority::Medium,
            done,
            due_date: None,
            project_id: None,
            project_name: None,
            created_at: None,
        }
    }

    fn project(id: u32, status: ProjectStatus) -> Project {
        Project {
            id,
            name: format!("Project {}", id),
            description: None,
            status,
            progress: 0,
            due_date: None,
            team_members: 0,
            task_count: 0,
            completed_tasks: 0,
        }
    }

    #[test]
    fn test_task_filters() {
        let tasks = vec![task(1, "Buy milk", false), task(2, "File taxes", true), task(3, "Call Bob", false)];

        let ids = |v: Vec<&Task>| v.iter().map(|t| t.id).collect::<Vec<_>>();
        assert_eq!(ids(visible_tasks(&tasks, TaskFilter::All, "")), vec![1, 2, 3]);
        assert_eq!(ids(visible_tasks(&tasks, TaskFilter::Pending, "")), vec![1, 3]);
        assert_eq!(ids(visible_tasks(&tasks, TaskFilter::Completed, "")), vec![2]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_combines_with_filter() {
        let tasks = vec![task(1, "Buy MILK", false), task(2, "milk the cow", true), task(3, "Call Bob", false)];

        let ids = |v: Vec<&Task>| v.iter().map(|t| t.id).collect::<Vec<_>>();
        assert_eq!(ids(visible_tasks(&tasks, TaskFilter::All, "  milk ")), vec![1, 2]);
        assert_eq!(ids(visible_tasks(&tasks, TaskFilter::Pending, "milk")), vec![1]);
        assert!(visible_tasks(&tasks, TaskFilter::All, "zebra").is_empty());
    }

    #[test]
    fn test_project_filter() {
        let projects = vec![
            project(1, ProjectStatus::Active),
            project(2, ProjectStatus::Completed),
            project(3, ProjectStatus::Paused),
        ];
        assert_eq!(visible_projects(&projects, ProjectFilter::All).len(), 3);
        assert_eq!(visible_projects(&projects, ProjectFilter::Active)[0].id, 1);
        assert_eq!(visible_projects(&projects, ProjectFilter::Completed)[0].id, 2);
    }
}
