//! Project Form Modal

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::ModalFrame;
use crate::actions;
use crate::context::use_app_context;
use crate::forms::ProjectForm;
use crate::format::capitalize;
use crate::models::{Project, ProjectStatus};

#[component]
pub fn ProjectFormModal(modal_id: u32, project: Option<Project>) -> impl IntoView {
    let ctx = use_app_context();

    let initial = project.as_ref().map(ProjectForm::from_project).unwrap_or_default();
    let is_edit = initial.id.is_some();

    // A status the picker does not know is offered as-is so saving keeps it
    let mut statuses = ProjectStatus::CHOICES.to_vec();
    if !statuses.contains(&initial.status) {
        statuses.push(initial.status.clone());
    }
    let initial_status = initial.status.clone();

    let (name, set_name) = signal(initial.name.clone());
    let (description, set_description) = signal(initial.description.clone());
    let (status, set_status) = signal(initial.status.clone());
    let (due_date, set_due_date) = signal(initial.due_date.clone().unwrap_or_default());
    let (team_members, set_team_members) = signal(initial.team_members);
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);
    let base = StoredValue::new(initial);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let mut form = base.get_value();
        form.name = name.get_untracked();
        form.description = description.get_untracked();
        form.status = status.get_untracked();
        let due = due_date.get_untracked();
        form.due_date = Some(due.trim().to_string()).filter(|d| !d.is_empty());
        form.team_members = team_members.get_untracked();

        if let Err(msg) = form.validate() {
            set_error.set(Some(msg.to_string()));
            return;
        }
        set_error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            match actions::save_project(ctx, form).await {
                Ok(()) => ctx.close_modal(modal_id),
                Err(msg) => {
                    set_error.set(Some(msg));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <ModalFrame modal_id=modal_id title={if is_edit { "Edit Project" } else { "Create New Project" }}>
            <form class="modal-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="project-name">"Name"</label>
                    <input
                        id="project-name"
                        type="text"
                        placeholder="Project name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="project-description">"Description"</label>
                    <textarea
                        id="project-description"
                        rows="3"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="project-status">"Status"</label>
                        <select
                            id="project-status"
                            on:change=move |ev| set_status.set(ProjectStatus::parse(&event_target_value(&ev)))
                        >
                            {statuses
                                .into_iter()
                                .map(|s| {
                                    let selected = s == initial_status;
                                    view! {
                                        <option value=s.as_str().to_string() selected=selected>
                                            {capitalize(s.as_str())}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="project-due-date">"Due Date"</label>
                        <input
                            id="project-due-date"
                            type="date"
                            prop:value=move || due_date.get()
                            on:input=move |ev| set_due_date.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="project-team">"Team Members"</label>
                        <input
                            id="project-team"
                            type="number"
                            min="0"
                            prop:value=move || team_members.get().to_string()
                            on:input=move |ev| {
                                set_team_members.set(event_target_value(&ev).trim().parse().unwrap_or(0))
                            }
                        />
                    </div>
                </div>
                {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}
                <div class="form-actions">
                    <button type="button" class="action-btn" on:click=move |_| ctx.close_modal(modal_id)>
                        "Cancel"
                    </button>
                    <button type="submit" class="action-btn primary" disabled=move || saving.get()>
                        {move || match (saving.get(), is_edit) {
                            (true, _) => "Saving...",
                            (false, true) => "Update Project",
                            (false, false) => "Create Project",
                        }}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
