//! Task Form Modal
//!
//! Create when opened without a task, edit otherwise. Fields the form does
//! not show (completion) are carried over from the task being edited. The
//! project picker is create-only: the update endpoint does not write it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::ModalFrame;
use crate::actions;
use crate::context::use_app_context;
use crate::forms::TaskForm;
use crate::loaders;
use crate::models::{Priority, Task};
use crate::store::AppStateStoreFields;

#[component]
pub fn TaskFormModal(modal_id: u32, task: Option<Task>) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let initial = task.as_ref().map(TaskForm::from_task).unwrap_or_default();
    let is_edit = initial.id.is_some();
    // A priority the picker does not know is offered as-is so saving keeps it
    let mut priorities = Priority::CHOICES.to_vec();
    if !priorities.contains(&initial.priority) {
        priorities.push(initial.priority.clone());
    }
    let initial_priority = initial.priority.clone();
    let initial_project = initial.project_id;

    let (description, set_description) = signal(initial.description.clone());
    let (priority, set_priority) = signal(initial.priority.clone());
    let (due_date, set_due_date) = signal(initial.due_date.clone().unwrap_or_default());
    let (project_id, set_project_id) = signal(initial.project_id);
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);
    let base = StoredValue::new(initial);

    // The project picker needs the project list even when opened from another page
    if !is_edit && store.projects().with_untracked(|p| p.loaded().is_none() && !p.is_loading()) {
        spawn_local(loaders::load_projects(ctx));
    }

    let project_options = move || {
        store.projects().with(|state| {
            state
                .loaded()
                .map(|projects| {
                    projects
                        .iter()
                        .map(|p| (p.id, p.name.clone()))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let mut form = base.get_value();
        form.description = description.get_untracked().trim().to_string();
        form.priority = priority.get_untracked();
        let due = due_date.get_untracked();
        form.due_date = Some(due.trim().to_string()).filter(|d| !d.is_empty());
        form.project_id = project_id.get_untracked();

        if let Err(msg) = form.validate() {
            set_error.set(Some(msg.to_string()));
            return;
        }
        set_error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            match actions::save_task(ctx, form).await {
                Ok(()) => ctx.close_modal(modal_id),
                Err(msg) => {
                    set_error.set(Some(msg));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <ModalFrame modal_id=modal_id title={if is_edit { "Edit Task" } else { "Create New Task" }}>
            <form class="modal-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="task-description">"Description"</label>
                    <input
                        id="task-description"
                        type="text"
                        placeholder="What needs to be done?"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="task-priority">"Priority"</label>
                        <select
                            id="task-priority"
                            on:change=move |ev| set_priority.set(Priority::parse(&event_target_value(&ev)))
                        >
                            {priorities
                                .into_iter()
                                .map(|p| {
                                    let selected = p == initial_priority;
                                    view! {
                                        <option value=p.as_str().to_string() selected=selected>
                                            {p.label().to_string()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="task-due-date">"Due Date"</label>
                        <input
                            id="task-due-date"
                            type="date"
                            prop:value=move || due_date.get()
                            on:input=move |ev| set_due_date.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                {(!is_edit)
                    .then(|| {
                        view! {
                            <div class="form-group">
                                <label for="task-project">"Project"</label>
                                <select
                                    id="task-project"
                                    on:change=move |ev| set_project_id.set(event_target_value(&ev).parse::<u32>().ok())
                                >
                                    <option value="" selected=initial_project.is_none()>"No project"</option>
                                    <For
                                        each=project_options
                                        key=|(id, name)| (*id, name.clone())
                                        children=move |(id, name)| {
                                            view! {
                                                <option value=id.to_string() selected={initial_project == Some(id)}>
                                                    {name}
                                                </option>
                                            }
                                        }
                                    />
                                </select>
                            </div>
                        }
                    })}
                {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}
                <div class="form-actions">
                    <button type="button" class="action-btn" on:click=move |_| ctx.close_modal(modal_id)>
                        "Cancel"
                    </button>
                    <button type="submit" class="action-btn primary" disabled=move || saving.get()>
                        {move || match (saving.get(), is_edit) {
                            (true, _) => "Saving...",
                            (false, true) => "Update Task",
                            (false, false) => "Create Task",
                        }}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
