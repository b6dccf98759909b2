//! Modal Overlays
//!
//! Every open modal lives in the store and renders through one portal on the
//! body; closing removes it from the store and therefore from the DOM.

use leptos::portal::Portal;
use leptos::prelude::*;

use super::delete_confirm::ConfirmDeleteModal;
use super::note_form::NoteFormModal;
use super::note_view::NoteViewModal;
use super::project_form::ProjectFormModal;
use super::task_form::TaskFormModal;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields, Modal, ModalKind};

#[component]
pub fn ModalHost() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Portal>
            <div class="modal-layer">
                <For
                    each=move || store.modals().get()
                    key=|modal| modal.id
                    children=move |modal| view! { <ModalView modal=modal /> }
                />
            </div>
        </Portal>
    }
}

#[component]
fn ModalView(modal: Modal) -> impl IntoView {
    let id = modal.id;
    match modal.kind {
        ModalKind::TaskForm(task) => view! { <TaskFormModal modal_id=id task=task /> }.into_any(),
        ModalKind::ProjectForm(project) => {
            view! { <ProjectFormModal modal_id=id project=project /> }.into_any()
        }
        ModalKind::NoteForm(note) => view! { <NoteFormModal modal_id=id note=note /> }.into_any(),
        ModalKind::ConfirmDelete(target) => {
            view! { <ConfirmDeleteModal modal_id=id target=target /> }.into_any()
        }
        ModalKind::NoteView(note) => view! { <NoteViewModal modal_id=id note=note /> }.into_any(),
    }
}

/// Backdrop and dialog box; a click on the backdrop closes the modal.
#[component]
pub fn ModalFrame(
    modal_id: u32,
    #[prop(into)] title: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="modal-overlay" on:click=move |_| ctx.close_modal(modal_id)>
            <div class=format!("modal {class}") on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>{title}</h3>
                    <button
                        type="button"
                        class="modal-close"
                        title="Close"
                        on:click=move |_| ctx.close_modal(modal_id)
                    >
                        "×"
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
