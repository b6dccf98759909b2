//! Projects Page

use leptos::prelude::*;

use super::{FilterButtons, PageSection};
use crate::actions::handle_row_click;
use crate::context::use_app_context;
use crate::filters::{visible_projects, ProjectFilter};
use crate::render::{render_loadable, render_projects};
use crate::router::Route;
use crate::store::{AppStateStoreFields, ModalKind};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let grid_html = move || {
        let render_ctx = ctx.render_context();
        let filter = store.project_filter().get();
        store.projects().with(|state| {
            render_loadable(state, "projects", |projects| {
                let visible = visible_projects(projects, filter);
                render_projects(projects, &visible, &render_ctx)
            })
        })
    };

    let filter_options = ProjectFilter::ALL.iter().map(|f| (*f, f.label())).collect::<Vec<_>>();

    view! {
        <PageSection route=Route::Projects>
            <div class="page-header">
                <h2>"Projects"</h2>
                <button class="action-btn primary" on:click=move |_| {
                    ctx.open_modal(ModalKind::ProjectForm(None));
                }>
                    "+ New Project"
                </button>
            </div>

            <FilterButtons
                class="project-filters"
                options=filter_options
                current=Signal::derive(move || store.project_filter().get())
                on_select=Callback::new(move |filter| store.project_filter().set(filter))
            />

            <div
                id="projects-container"
                class="projects-grid"
                inner_html=grid_html
                on:click=move |ev| handle_row_click(ctx, &ev)
            ></div>
        </PageSection>
    }
}
