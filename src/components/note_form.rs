//! Note Form Modal

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::ModalFrame;
use crate::actions;
use crate::context::use_app_context;
use crate::forms::NoteForm;
use crate::models::Note;

#[component]
pub fn NoteFormModal(modal_id: u32, note: Option<Note>) -> impl IntoView {
    let ctx = use_app_context();

    let initial = note.as_ref().map(NoteForm::from_note).unwrap_or_default();
    let is_edit = initial.id.is_some();

    let (title, set_title) = signal(initial.title.clone());
    let (content, set_content) = signal(initial.content.clone());
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);
    let base = StoredValue::new(initial);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let mut form = base.get_value();
        form.title = title.get_untracked();
        form.content = content.get_untracked();

        if let Err(msg) = form.validate() {
            set_error.set(Some(msg.to_string()));
            return;
        }
        set_error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            match actions::save_note(ctx, form).await {
                Ok(()) => ctx.close_modal(modal_id),
                Err(msg) => {
                    set_error.set(Some(msg));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <ModalFrame modal_id=modal_id title={if is_edit { "Edit Note" } else { "Create New Note" }}>
            <form class="modal-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="note-title">"Title"</label>
                    <input
                        id="note-title"
                        type="text"
                        placeholder="Note title"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="note-content">"Content"</label>
                    <textarea
                        id="note-content"
                        rows="8"
                        prop:value=move || content.get()
                        on:input=move |ev| set_content.set(event_target_value(&ev))
                    ></textarea>
                </div>
                {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}
                <div class="form-actions">
                    <button type="button" class="action-btn" on:click=move |_| ctx.close_modal(modal_id)>
                        "Cancel"
                    </button>
                    <button type="submit" class="action-btn primary" disabled=move || saving.get()>
                        {move || match (saving.get(), is_edit) {
                            (true, _) => "Saving...",
                            (false, true) => "Update Note",
                            (false, false) => "Create Note",
                        }}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
