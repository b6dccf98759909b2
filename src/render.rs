//! HTML Renderers
//!
//! Pure functions from loaded records to markup for the page containers.
//! Every user-supplied string goes through `escape_html`; row buttons carry
//! `data-action`/`data-id` for the container's delegated handlers.

use chrono::{DateTime, NaiveDate, Utc};

use crate::format::{capitalize, count_label, due_label, escape_html, percent, relative_time, truncate};
use crate::models::{Analytics, Loadable, Note, Project, Task};

/// Clock and budgets a render pass needs
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    pub now: DateTime<Utc>,
    pub note_preview_chars: usize,
    pub task_preview_chars: usize,
}

impl RenderContext {
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }
}

/// Map a collection state onto markup: placeholder, rendered content, or inline error.
pub fn render_loadable<T>(state: &Loadable<T>, what: &str, render: impl FnOnce(&T) -> String) -> String {
    match state {
        Loadable::Idle => String::new(),
        Loadable::Loading => format!(r#"<div class="loading-placeholder">Loading {}...</div>"#, what),
        Loadable::Loaded(value) => render(value),
        Loadable::Failed(message) => format!(
            r#"<div class="error">Error loading {}: {}. Please try again.</div>"#,
            what,
            escape_html(message)
        ),
    }
}

pub fn task_count_label(tasks: &[Task]) -> String {
    count_label(tasks.len(), "task")
}

// ========================
// Tasks
// ========================

/// Task rows. `all` decides the empty-state wording, `visible` is what passed the filters.
pub fn render_tasks(all: &[Task], visible: &[&Task], ctx: &RenderContext) -> String {
    if all.is_empty() {
        return r#"<div class="no-tasks">No tasks found. Create your first task!</div>"#.to_string();
    }
    if visible.is_empty() {
        return r#"<div class="no-tasks">No tasks match the current filter.</div>"#.to_string();
    }
    visible.iter().map(|task| render_task(task, ctx)).collect()
}

pub fn render_task(task: &Task, ctx: &RenderContext) -> String {
    let id = task.id;
    let title = if task.description.trim().is_empty() {
        "No description".to_string()
    } else {
        escape_html(&truncate(&task.description, ctx.task_preview_chars))
    };
    let project = task
        .project_name
        .as_deref()
        .map(|name| format!(r#"<span class="task-project">📁 {}</span>"#, escape_html(name)))
        .unwrap_or_default();
    let due = task
        .due_date
        .as_deref()
        .map(|d| format!(r#"<span class="task-due">{}</span>"#, escape_html(&due_label(Some(d), ctx.today()))))
        .unwrap_or_default();

    format!(
        r#"<div class="task-item{completed}" data-task-id="{id}">
    <input type="checkbox" class="task-checkbox" data-action="toggle-task" data-id="{id}"{checked}>
    <div class="task-content">
        <span class="task-title" title="{full}">{title}</span>
        <span class="task-meta"><span class="priority-badge {priority}">{priority_label}</span>{due}{project}<span class="task-id">ID: {id}</span></span>
    </div>
    <div class="task-actions">
        <button class="task-action edit" data-action="edit-task" data-id="{id}">Edit</button>
        <button class="task-action delete" data-action="delete-task" data-id="{id}">Delete</button>
    </div>
</div>"#,
        completed = if task.done { " completed" } else { "" },
        checked = if task.done { " checked" } else { "" },
        full = escape_html(&task.description),
        priority = escape_html(task.priority.as_str().trim()),
        priority_label = escape_html(task.priority.label()),
    )
}

// ========================
// Projects
// ========================

pub fn render_projects(all: &[Project], visible: &[&Project], ctx: &RenderContext) -> String {
    if all.is_empty() {
        return r#"<div class="no-projects">No projects found. Create your first project!</div>"#.to_string();
    }
    if visible.is_empty() {
        return r#"<div class="no-projects">No projects with this status.</div>"#.to_string();
    }
    visible.iter().map(|project| render_project(project, ctx)).collect()
}

pub fn render_project(project: &Project, ctx: &RenderContext) -> String {
    let id = project.id;
    let status = project.status.as_str();
    let description = match project.description.as_deref() {
        Some(d) => escape_html(d),
        None => "No description".to_string(),
    };
    format!(
        r#"<div class="dashboard-card project-card" data-project-id="{id}">
    <div class="card-header">
        <h3>{name}</h3>
        <span class="project-status-badge {status_class}">{status_label}</span>
    </div>
    <div class="project-details">
        <p>{description}</p>
        <div class="project-progress">
            <div class="progress-bar"><div class="progress" style="width: {progress}%"></div></div>
            <span class="progress-text">{progress}% Complete</span>
        </div>
        <div class="project-meta">
            <span class="project-due">{due}</span>
            <span class="project-tasks">{tasks} ({completed} completed)</span>
            <span class="project-team">Team Members: {team}</span>
        </div>
        <div class="project-actions">
            <button class="task-action edit" data-action="edit-project" data-id="{id}">Edit</button>
            <button class="task-action delete" data-action="delete-project" data-id="{id}">Delete</button>
        </div>
    </div>
</div>"#,
        name = escape_html(&project.name),
        status_class = escape_html(status),
        status_label = escape_html(&capitalize(status)),
        progress = project.progress.min(100),
        due = escape_html(&due_label(project.due_date.as_deref(), ctx.today())),
        tasks = count_label(project.task_count as usize, "task"),
        completed = project.completed_tasks,
        team = project.team_members,
    )
}

// ========================
// Notes
// ========================

pub fn render_notes(notes: &[Note], ctx: &RenderContext) -> String {
    if notes.is_empty() {
        return r#"<div class="no-notes">No notes found. Create your first note!</div>"#.to_string();
    }
    notes.iter().map(|note| render_note(note, ctx)).collect()
}

pub fn render_note(note: &Note, ctx: &RenderContext) -> String {
    let id = note.id;
    let updated = if note.updated_at.trim().is_empty() {
        String::new()
    } else {
        format!("<small>Updated {}</small>", escape_html(&relative_time(&note.updated_at, ctx.now)))
    };
    format!(
        r#"<div class="dashboard-card note-card" data-note-id="{id}">
    <div class="note-header">
        <h4>{title}</h4>
        {updated}
    </div>
    <div class="note-content"><p>{content}</p></div>
    <div class="note-actions">
        <button class="note-action" data-action="edit-note" data-id="{id}">Edit</button>
        <button class="note-action" data-action="delete-note" data-id="{id}">Delete</button>
        <button class="note-action" data-action="view-note" data-id="{id}">View Full</button>
    </div>
</div>"#,
        title = escape_html(&note.title),
        content = escape_html(&truncate(&note.content, ctx.note_preview_chars)),
    )
}

// ========================
// Analytics
// ========================

pub fn completion_line(analytics: &Analytics) -> String {
    format!("{} completion rate this month", percent(analytics.completion_rate, 1))
}

pub fn render_analytics_stats(analytics: &Analytics) -> String {
    let card = |icon: &str, number: String, label: &str| {
        format!(
            r#"<div class="stat-card"><div class="stat-icon">{}</div><div class="stat-info"><div class="stat-number">{}</div><div class="stat-label">{}</div></div></div>"#,
            icon, number, label
        )
    };
    [
        card("📝", analytics.total_tasks.to_string(), "Total Tasks"),
        card("✅", analytics.completed_tasks.to_string(), "Completed"),
        card("⏳", analytics.pending().to_string(), "Pending"),
        card("🔥", analytics.high_priority_tasks.to_string(), "High Priority"),
        card("📊", percent(analytics.completion_rate, 1), "Success Rate"),
    ]
    .concat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::parse_timestamp;
    use crate::models::{Priority, ProjectStatus};

    fn ctx() -> RenderContext {
        RenderContext {
            now: parse_timestamp("2024-03-10T12:00:00Z").unwrap(),
            note_preview_chars: 150,
            task_preview_chars: 120,
        }
    }

    fn task(id: u32, description: &str) -> Task {
        Task {
            id,
            description: description.to_string(),
            priority: Priority::High,
            done: false,
            due_date: Some("2024-03-12".to_string()),
            project_id: None,
            project_name: Some("Q1 <Launch>".to_string()),
            created_at: None,
        }
    }

    fn note(content: &str) -> Note {
        Note {
            id: 8,
            title: "Meeting".to_string(),
            content: content.to_string(),
            updated_at: "2024-03-10 09:00:00".to_string(),
            created_at: None,
        }
    }

    #[test]
    fn test_task_markup_is_escaped() {
        let tasks = vec![task(1, "<script>alert('x')</script>")];
        let visible: Vec<&Task> = tasks.iter().collect();
        let html = render_tasks(&tasks, &visible, &ctx());

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("Q1 &lt;Launch&gt;"));
        assert!(html.contains(r#"data-action="delete-task" data-id="1""#));
        assert!(html.contains("Due in 2 days"));
        assert!(!html.contains(" checked"));
    }

    #[test]
    fn test_completed_task_is_checked() {
        let done = Task { done: true, ..task(2, "Done thing") };
        let html = render_task(&done, &ctx());
        assert!(html.contains(r#"class="task-item completed""#));
        assert!(html.contains(" checked>"));
    }

    #[test]
    fn test_free_text_priority_is_escaped() {
        let odd = Task { priority: Priority::Other("\"><b>x".into()), ..task(3, "Odd") };
        let html = render_task(&odd, &ctx());
        assert!(html.contains(r#"class="priority-badge &quot;&gt;&lt;b&gt;x""#));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_task_empty_states() {
        assert!(render_tasks(&[], &[], &ctx()).contains("No tasks found"));
        let tasks = vec![task(1, "a")];
        assert!(render_tasks(&tasks, &[], &ctx()).contains("No tasks match"));
    }

    #[test]
    fn test_task_count_label() {
        assert_eq!(task_count_label(&[]), "0 tasks");
        assert_eq!(task_count_label(&[task(1, "a")]), "1 task");
        assert_eq!(task_count_label(&[task(1, "a"), task(2, "b")]), "2 tasks");
    }

    #[test]
    fn test_note_content_truncated() {
        let content = "x".repeat(200);
        let html = render_note(&note(&content), &ctx());
        let expected = format!("<p>{}...</p>", "x".repeat(150));
        assert!(html.contains(&expected));
        assert!(!html.contains(&"x".repeat(151)));
        assert!(html.contains("Updated 3 hours ago"));
    }

    #[test]
    fn test_short_note_untouched() {
        let html = render_note(&note("short & sweet"), &ctx());
        assert!(html.contains("<p>short &amp; sweet</p>"));
        assert!(render_notes(&[], &ctx()).contains("No notes found"));
    }

    #[test]
    fn test_project_card() {
        let project = Project {
            id: 3,
            name: "Site \"v2\"".to_string(),
            description: None,
            status: ProjectStatus::Planning,
            progress: 40,
            due_date: None,
            team_members: 2,
            task_count: 5,
            completed_tasks: 2,
        };
        let html = render_project(&project, &ctx());
        assert!(html.contains("<h3>Site &quot;v2&quot;</h3>"));
        assert!(html.contains(r#"project-status-badge planning">Planning<"#));
        assert!(html.contains("No description"));
        assert!(html.contains("width: 40%"));
        assert!(html.contains("5 tasks (2 completed)"));
        assert!(html.contains("No due date"));
    }

    #[test]
    fn test_loadable_states() {
        let loading: Loadable<Vec<Note>> = Loadable::Loading;
        assert!(render_loadable(&loading, "notes", |_| String::new()).contains("Loading notes..."));

        let failed: Loadable<Vec<Note>> = Loadable::Failed("network error: <down>".into());
        let html = render_loadable(&failed, "notes", |_| String::new());
        assert!(html.contains(r#"class="error""#));
        assert!(html.contains("&lt;down&gt;"));

        let loaded = Loadable::Loaded(3);
        assert_eq!(render_loadable(&loaded, "x", |n| n.to_string()), "3");
    }

    #[test]
    fn test_analytics() {
        let analytics = Analytics {
            total_tasks: 8,
            completed_tasks: 3,
            completion_rate: 37.5,
            ..Default::default()
        };
        assert_eq!(completion_line(&analytics), "37.5% completion rate this month");
        let html = render_analytics_stats(&analytics);
        assert!(html.contains(r#"<div class="stat-number">5</div><div class="stat-label">Pending</div>"#));
        assert!(html.contains("37.5%"));
    }
}
