//! Delete Confirmation Modal
//!
//! Confirm/cancel step in front of project and note deletion.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::ModalFrame;
use crate::actions;
use crate::context::use_app_context;
use crate::store::DeleteTarget;

#[component]
pub fn ConfirmDeleteModal(modal_id: u32, target: DeleteTarget) -> impl IntoView {
    let ctx = use_app_context();
    let (deleting, set_deleting) = signal(false);

    let (title, prompt, detail) = match &target {
        DeleteTarget::Project { name, .. } => (
            "Delete Project",
            format!("Delete project \"{name}\"?"),
            "Its tasks are kept but will no longer belong to a project.",
        ),
        DeleteTarget::Note { title, .. } => (
            "Delete Note",
            format!("Delete note \"{title}\"?"),
            "This cannot be undone.",
        ),
    };

    let on_confirm = move |_| {
        if deleting.get_untracked() {
            return;
        }
        set_deleting.set(true);
        let target = target.clone();
        spawn_local(async move {
            // Failures are alerted by the action; the dialog closes either way
            let _ = match target {
                DeleteTarget::Project { id, .. } => actions::delete_project(ctx, id).await,
                DeleteTarget::Note { id, .. } => actions::delete_note(ctx, id).await,
            };
            ctx.close_modal(modal_id);
        });
    };

    view! {
        <ModalFrame modal_id=modal_id title=title class="confirm-modal">
            <p class="delete-confirm-text">{prompt}</p>
            <p class="delete-confirm-detail">{detail}</p>
            <div class="form-actions">
                <button type="button" class="action-btn" on:click=move |_| ctx.close_modal(modal_id)>
                    "Cancel"
                </button>
                <button
                    type="button"
                    class="action-btn danger"
                    disabled=move || deleting.get()
                    on:click=on_confirm
                >
                    {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                </button>
            </div>
        </ModalFrame>
    }
}
