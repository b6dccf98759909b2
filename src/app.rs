//! TaskLift Dashboard App
//!
//! Root component: builds the store, wires routing to the URL fragment and
//! browser history, and lays out sidebar, top bar, pages and modals.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    AnalyticsPage, DocumentsPage, ModalHost, NotesPage, OverviewPage, ProjectsPage, Sidebar,
    TasksPage, TopBar,
};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::router::{current_hash, route_from_state, Trigger};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new(store, ClientConfig::load());
    provide_context(ctx);

    // Back/forward: the route name travels in the history entry's state
    let _ = window_event_listener(leptos::ev::popstate, move |ev| {
        ctx.resolve(&route_from_state(ev.state()), Trigger::History);
    });

    // Route named by the fragment the page was opened with
    Effect::new(move |_| {
        ctx.resolve(&current_hash(), Trigger::InitialLoad);
    });

    view! {
        <div class="app-layout" class:sidebar-collapsed=move || store.sidebar_collapsed().get()>
            <Sidebar />
            <main class="main-content">
                <TopBar />
                <OverviewPage />
                <TasksPage />
                <ProjectsPage />
                <NotesPage />
                <AnalyticsPage />
                <DocumentsPage />
            </main>
            <div
                id="loading-spinner"
                class="loading-spinner"
                style:display=move || if store.loading().get() { "flex" } else { "none" }
            >
                <div class="spinner"></div>
            </div>
            <ModalHost />
        </div>
    }
}
