//! Full Note Modal
//!
//! The whole note body; list cards only show a preview.

use leptos::prelude::*;

use super::ModalFrame;
use crate::context::use_app_context;
use crate::format::relative_time;
use crate::models::Note;
use crate::store::ModalKind;

#[component]
pub fn NoteViewModal(modal_id: u32, note: Note) -> impl IntoView {
    let ctx = use_app_context();
    let now = ctx.render_context().now;

    let updated = (!note.updated_at.trim().is_empty())
        .then(|| format!("Updated {}", relative_time(&note.updated_at, now)));
    let title = note.title.clone();
    let content = note.content.clone();
    let note = StoredValue::new(note);

    let on_edit = move |_| {
        ctx.close_modal(modal_id);
        ctx.open_modal(ModalKind::NoteForm(Some(note.get_value())));
    };

    view! {
        <ModalFrame modal_id=modal_id title=title class="note-view-modal">
            {updated.map(|text| view! { <small class="note-updated">{text}</small> })}
            <div class="note-full-content">{content}</div>
            <div class="form-actions">
                <button type="button" class="action-btn" on:click=on_edit>
                    "Edit"
                </button>
                <button type="button" class="action-btn primary" on:click=move |_| ctx.close_modal(modal_id)>
                    "Close"
                </button>
            </div>
        </ModalFrame>
    }
}
