//! Notes Page

use leptos::prelude::*;

use super::PageSection;
use crate::actions::handle_row_click;
use crate::context::use_app_context;
use crate::render::{render_loadable, render_notes};
use crate::router::Route;
use crate::store::{AppStateStoreFields, ModalKind};

#[component]
pub fn NotesPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let grid_html = move || {
        let render_ctx = ctx.render_context();
        store
            .notes()
            .with(|state| render_loadable(state, "notes", |notes| render_notes(notes, &render_ctx)))
    };

    view! {
        <PageSection route=Route::Notes>
            <div class="page-header">
                <h2>"Notes"</h2>
                <button class="action-btn primary" on:click=move |_| {
                    ctx.open_modal(ModalKind::NoteForm(None));
                }>
                    "+ New Note"
                </button>
            </div>

            <div
                id="notes-container"
                class="notes-grid"
                inner_html=grid_html
                on:click=move |ev| handle_row_click(ctx, &ev)
            ></div>
        </PageSection>
    }
}
