//! Mutations and Row Actions
//!
//! Create/update/delete per entity type, plus the delegated handlers behind
//! the buttons inside rendered rows. Every successful mutation re-runs the
//! affected loaders rather than patching local state.

use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::error::ApiError;
use crate::forms::{NoteForm, ProjectForm, TaskForm};
use crate::loaders;
use crate::report;
use crate::store::{
    store_find_note, store_find_project, store_find_task, store_remove_note, store_remove_project,
    store_remove_task, DeleteTarget, ModalKind,
};

/// A button or checkbox inside rendered list markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    ToggleTask(u32),
    EditTask(u32),
    DeleteTask(u32),
    EditProject(u32),
    DeleteProject(u32),
    EditNote(u32),
    DeleteNote(u32),
    ViewNote(u32),
}

impl RowAction {
    /// From the `data-action` / `data-id` attribute pair.
    pub fn parse(action: &str, id: &str) -> Option<Self> {
        let id: u32 = id.trim().parse().ok()?;
        let action = match action {
            "toggle-task" => RowAction::ToggleTask(id),
            "edit-task" => RowAction::EditTask(id),
            "delete-task" => RowAction::DeleteTask(id),
            "edit-project" => RowAction::EditProject(id),
            "delete-project" => RowAction::DeleteProject(id),
            "edit-note" => RowAction::EditNote(id),
            "delete-note" => RowAction::DeleteNote(id),
            "view-note" => RowAction::ViewNote(id),
            _ => return None,
        };
        Some(action)
    }

    /// Checkbox changes arrive as `change`, everything else as `click`.
    pub fn is_change(&self) -> bool {
        matches!(self, RowAction::ToggleTask(_))
    }
}

/// Resolve the action an event inside a list container refers to.
fn action_from_event(ev: &web_sys::Event) -> Option<(RowAction, web_sys::Element)> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let el = target.closest("[data-action]").ok().flatten()?;
    let action = el.get_attribute("data-action")?;
    let id = el.get_attribute("data-id")?;
    match RowAction::parse(&action, &id) {
        Some(parsed) => Some((parsed, el)),
        None => {
            tracing::warn!(%action, %id, "unrecognised row action");
            None
        }
    }
}

/// Delegated `click` handler for list containers.
pub fn handle_row_click(ctx: AppContext, ev: &web_sys::Event) {
    let Some((action, _)) = action_from_event(ev) else {
        return;
    };
    if action.is_change() {
        return;
    }
    match action {
        RowAction::EditTask(id) => match store_find_task(&ctx.store, id) {
            Some(task) => {
                ctx.open_modal(ModalKind::TaskForm(Some(task)));
            }
            None => tracing::warn!(id, "edit requested for unknown task"),
        },
        RowAction::DeleteTask(id) => delete_task(ctx, id),
        RowAction::EditProject(id) => match store_find_project(&ctx.store, id) {
            Some(project) => {
                ctx.open_modal(ModalKind::ProjectForm(Some(project)));
            }
            None => tracing::warn!(id, "edit requested for unknown project"),
        },
        RowAction::DeleteProject(id) => {
            let name = store_find_project(&ctx.store, id).map(|p| p.name).unwrap_or_default();
            ctx.open_modal(ModalKind::ConfirmDelete(DeleteTarget::Project { id, name }));
        }
        RowAction::EditNote(id) => match store_find_note(&ctx.store, id) {
            Some(note) => {
                ctx.open_modal(ModalKind::NoteForm(Some(note)));
            }
            None => tracing::warn!(id, "edit requested for unknown note"),
        },
        RowAction::DeleteNote(id) => {
            let title = store_find_note(&ctx.store, id).map(|n| n.title).unwrap_or_default();
            ctx.open_modal(ModalKind::ConfirmDelete(DeleteTarget::Note { id, title }));
        }
        RowAction::ViewNote(id) => match store_find_note(&ctx.store, id) {
            Some(note) => {
                ctx.open_modal(ModalKind::NoteView(note));
            }
            None => tracing::warn!(id, "view requested for unknown note"),
        },
        RowAction::ToggleTask(_) => {}
    }
}

/// Delegated `change` handler for the task list (completion checkboxes).
pub fn handle_row_change(ctx: AppContext, ev: &web_sys::Event) {
    let Some((RowAction::ToggleTask(id), el)) = action_from_event(ev) else {
        return;
    };
    let Some(checkbox) = el.dyn_ref::<web_sys::HtmlInputElement>() else {
        tracing::warn!(id, "toggle-task action not on a checkbox");
        return;
    };
    toggle_task(ctx, id, checkbox.checked());
}

// ========================
// Tasks
// ========================

/// Flip completion, sending every other field back unchanged.
pub fn toggle_task(ctx: AppContext, id: u32, done: bool) {
    let Some(task) = store_find_task(&ctx.store, id) else {
        tracing::warn!(id, "toggle requested for unknown task");
        return;
    };
    let form = TaskForm::from_task(&task).with_done(done);
    spawn_local(async move {
        if let Err(err) = ctx.api().update_task(&form).await {
            report_failure(&err, "Failed to update task");
        }
        // On failure this also puts the checkbox back to the stored state.
        loaders::load_tasks(ctx).await;
        loaders::load_overview_stats(ctx).await;
    });
}

/// Create (no id) or update a task. `Err` carries the alert text already shown.
pub async fn save_task(ctx: AppContext, form: TaskForm) -> Result<(), String> {
    let result = match form.id {
        Some(_) => ctx.api().update_task(&form).await,
        None => ctx.api().create_task(&form).await,
    };
    let fallback = if form.id.is_some() { "Failed to update task" } else { "Failed to create task" };
    result.map_err(|err| report_failure(&err, fallback))?;
    loaders::load_tasks(ctx).await;
    loaders::load_overview_stats(ctx).await;
    Ok(())
}

/// Native confirm, then delete.
pub fn delete_task(ctx: AppContext, id: u32) {
    if !confirm("Are you sure you want to delete this task?") {
        return;
    }
    spawn_local(async move {
        match ctx.api().delete_task(id).await {
            Ok(()) => {
                store_remove_task(&ctx.store, id);
                loaders::load_tasks(ctx).await;
                loaders::load_overview_stats(ctx).await;
            }
            Err(err) => {
                report_failure(&err, "Failed to delete task");
            }
        }
    });
}

// ========================
// Projects
// ========================

pub async fn save_project(ctx: AppContext, form: ProjectForm) -> Result<(), String> {
    let result = match form.id {
        Some(_) => ctx.api().update_project(&form).await,
        None => ctx.api().create_project(&form).await,
    };
    let fallback = if form.id.is_some() { "Failed to update project" } else { "Failed to create project" };
    result.map_err(|err| report_failure(&err, fallback))?;
    loaders::load_projects(ctx).await;
    Ok(())
}

pub async fn delete_project(ctx: AppContext, id: u32) -> Result<(), String> {
    ctx.api()
        .delete_project(id)
        .await
        .map_err(|err| report_failure(&err, "Failed to delete project"))?;
    store_remove_project(&ctx.store, id);
    loaders::load_projects(ctx).await;
    loaders::load_overview_stats(ctx).await;
    Ok(())
}

// ========================
// Notes
// ========================

pub async fn save_note(ctx: AppContext, form: NoteForm) -> Result<(), String> {
    let result = match form.id {
        Some(_) => ctx.api().update_note(&form).await,
        None => ctx.api().create_note(&form).await,
    };
    let fallback = if form.id.is_some() { "Failed to update note" } else { "Failed to create note" };
    result.map_err(|err| report_failure(&err, fallback))?;
    loaders::load_notes(ctx).await;
    Ok(())
}

pub async fn delete_note(ctx: AppContext, id: u32) -> Result<(), String> {
    ctx.api()
        .delete_note(id)
        .await
        .map_err(|err| report_failure(&err, "Failed to delete note"))?;
    store_remove_note(&ctx.store, id);
    loaders::load_notes(ctx).await;
    Ok(())
}

// ========================
// Page actions
// ========================

/// Fetch fresh aggregates and download them as a text report.
pub fn export_report(ctx: AppContext) {
    spawn_local(async move {
        match ctx.api().analytics().await {
            Ok(analytics) => {
                let now = chrono::Utc::now();
                let text = report::build_report(&analytics, now);
                if let Err(err) = report::download_text(&report::report_filename(now), &text) {
                    tracing::error!(?err, "report download failed");
                    alert("Error generating report");
                }
            }
            Err(err) => {
                report_failure(&err, "Error generating report");
            }
        }
    });
}

pub fn upload_document() {
    alert("Document upload is not available yet.\n\nPlanned: drag & drop upload, previews, version history and sharing.");
}

/// Log, alert, and hand back the alert text.
fn report_failure(err: &ApiError, fallback: &str) -> String {
    tracing::error!(error = %err, "{}", fallback);
    let message = err.user_message(fallback);
    alert(&message);
    message
}

fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            let _ = window.alert_with_message(message);
        }
        None => tracing::warn!(message, "no window for alert"),
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_row_actions() {
        assert_eq!(RowAction::parse("toggle-task", "3"), Some(RowAction::ToggleTask(3)));
        assert_eq!(RowAction::parse("delete-project", " 12 "), Some(RowAction::DeleteProject(12)));
        assert_eq!(RowAction::parse("view-note", "7"), Some(RowAction::ViewNote(7)));
        assert_eq!(RowAction::parse("explode", "1"), None);
        assert_eq!(RowAction::parse("edit-note", "abc"), None);
        assert_eq!(RowAction::parse("edit-note", ""), None);
    }

    #[test]
    fn test_only_toggle_is_a_change_action() {
        assert!(RowAction::ToggleTask(1).is_change());
        assert!(!RowAction::DeleteTask(1).is_change());
        assert!(!RowAction::EditNote(1).is_change());
    }
}
