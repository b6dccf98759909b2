//! Tasks Page
//!
//! The list is rendered as markup; row buttons are handled by one delegated
//! listener on the container.

use leptos::prelude::*;

use super::{FilterButtons, PageSection};
use crate::actions::{handle_row_change, handle_row_click};
use crate::context::use_app_context;
use crate::filters::{visible_tasks, TaskFilter};
use crate::render::{render_loadable, render_tasks, task_count_label};
use crate::router::Route;
use crate::store::{AppStateStoreFields, ModalKind};

#[component]
pub fn TasksPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let count = move || {
        store
            .tasks()
            .with(|state| state.loaded().map(|tasks| task_count_label(tasks)).unwrap_or_default())
    };

    let list_html = move || {
        let render_ctx = ctx.render_context();
        let filter = store.task_filter().get();
        let query = store.search_query().get();
        store.tasks().with(|state| {
            render_loadable(state, "tasks", |tasks| {
                let visible = visible_tasks(tasks, filter, &query);
                render_tasks(tasks, &visible, &render_ctx)
            })
        })
    };

    let filter_options = TaskFilter::ALL.iter().map(|f| (*f, f.label())).collect::<Vec<_>>();

    view! {
        <PageSection route=Route::Tasks>
            <div class="page-header">
                <div class="page-heading">
                    <h2>"Tasks"</h2>
                    <span id="task-count" class="task-count">{count}</span>
                </div>
                <button class="action-btn primary" on:click=move |_| {
                    ctx.open_modal(ModalKind::TaskForm(None));
                }>
                    "+ New Task"
                </button>
            </div>

            <FilterButtons
                class="task-filters"
                options=filter_options
                current=Signal::derive(move || store.task_filter().get())
                on_select=Callback::new(move |filter| store.task_filter().set(filter))
            />

            <div
                id="tasks-container"
                class="tasks-list"
                inner_html=list_html
                on:click=move |ev| handle_row_click(ctx, &ev)
                on:change=move |ev| handle_row_change(ctx, &ev)
            ></div>
        </PageSection>
    }
}
