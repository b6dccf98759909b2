//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Created once by
//! the root component and shared through context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filters::{AnalyticsRange, ProjectFilter, TaskFilter};
use crate::models::{Analytics, Loadable, Note, Project, Task};
use crate::router::Router;

/// Which record a delete confirmation is about
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteTarget {
    Project { id: u32, name: String },
    Note { id: u32, title: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalKind {
    /// `None` creates, `Some` edits
    TaskForm(Option<Task>),
    ProjectForm(Option<Project>),
    NoteForm(Option<Note>),
    ConfirmDelete(DeleteTarget),
    NoteView(Note),
}

/// An open overlay; `id` is unique for the page's lifetime
#[derive(Debug, Clone, PartialEq)]
pub struct Modal {
    pub id: u32,
    pub kind: ModalKind,
}

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Route state machine; the current route drives which section is active
    pub router: Router,
    /// Route loader in flight (spinner)
    pub loading: bool,
    pub tasks: Loadable<Vec<Task>>,
    pub projects: Loadable<Vec<Project>>,
    pub notes: Loadable<Vec<Note>>,
    /// Shared by the overview tiles and the analytics page
    pub analytics: Loadable<Analytics>,
    pub task_filter: TaskFilter,
    /// Debounced header search text
    pub search_query: String,
    pub project_filter: ProjectFilter,
    pub analytics_range: AnalyticsRange,
    pub sidebar_collapsed: bool,
    /// Open overlays, oldest first
    pub modals: Vec<Modal>,
    pub next_modal_id: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a modal and return its id
pub fn store_open_modal(store: &AppStore, kind: ModalKind) -> u32 {
    let id = store.next_modal_id().get_untracked();
    store.next_modal_id().set(id + 1);
    store.modals().write().push(Modal { id, kind });
    id
}

pub fn store_close_modal(store: &AppStore, modal_id: u32) {
    store.modals().write().retain(|m| m.id != modal_id);
}

pub fn store_find_task(store: &AppStore, task_id: u32) -> Option<Task> {
    store.tasks().with_untracked(|tasks| {
        tasks.loaded().and_then(|list| list.iter().find(|t| t.id == task_id).cloned())
    })
}

pub fn store_find_project(store: &AppStore, project_id: u32) -> Option<Project> {
    store.projects().with_untracked(|projects| {
        projects.loaded().and_then(|list| list.iter().find(|p| p.id == project_id).cloned())
    })
}

pub fn store_find_note(store: &AppStore, note_id: u32) -> Option<Note> {
    store.notes().with_untracked(|notes| {
        notes.loaded().and_then(|list| list.iter().find(|n| n.id == note_id).cloned())
    })
}

/// Remove a task from the store by ID (its row disappears on the next render)
pub fn store_remove_task(store: &AppStore, task_id: u32) {
    if let Loadable::Loaded(tasks) = &mut *store.tasks().write() {
        tasks.retain(|t| t.id != task_id);
    }
}

pub fn store_remove_project(store: &AppStore, project_id: u32) {
    if let Loadable::Loaded(projects) = &mut *store.projects().write() {
        projects.retain(|p| p.id != project_id);
    }
}

pub fn store_remove_note(store: &AppStore, note_id: u32) {
    if let Loadable::Loaded(notes) = &mut *store.notes().write() {
        notes.retain(|n| n.id != note_id);
    }
}
