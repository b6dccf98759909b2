//! Overview Page
//!
//! Headline tiles from the analytics aggregate plus quick actions.

use leptos::prelude::*;

use super::PageSection;
use crate::context::use_app_context;
use crate::format::percent;
use crate::models::{Analytics, Loadable};
use crate::router::Route;
use crate::store::{AppStateStoreFields, ModalKind};

#[component]
pub fn OverviewPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    // "..." while the first fetch is in flight, "-" if it failed
    let tile = move |pick: fn(&Analytics) -> String| {
        move || {
            store.analytics().with(|state| match state {
                Loadable::Loaded(a) => pick(a),
                Loadable::Failed(_) => "-".to_string(),
                Loadable::Idle | Loadable::Loading => "...".to_string(),
            })
        }
    };
    let error = move || {
        store.analytics().with(|state| match state {
            Loadable::Failed(msg) => Some(format!("Could not load statistics: {msg}")),
            _ => None,
        })
    };

    view! {
        <PageSection route=Route::Overview>
            <div class="welcome-card dashboard-card">
                <h2>"Welcome back"</h2>
                <p>"Here is where your work stands today."</p>
            </div>

            <div class="stats-grid">
                <div class="stat-card">
                    <div class="stat-icon">"📝"</div>
                    <div class="stat-info">
                        <div id="active-tasks-count" class="stat-number">
                            {tile(|a| a.pending().to_string())}
                        </div>
                        <div class="stat-label">"Active Tasks"</div>
                    </div>
                </div>
                <div class="stat-card">
                    <div class="stat-icon">"📈"</div>
                    <div class="stat-info">
                        <div id="completion-rate" class="stat-number">
                            {tile(|a| percent(a.completion_rate, 0))}
                        </div>
                        <div class="stat-label">"Completion Rate"</div>
                    </div>
                </div>
                <div class="stat-card">
                    <div class="stat-icon">"✅"</div>
                    <div class="stat-info">
                        <div id="completed-count" class="stat-number">
                            {tile(|a| a.completed_tasks.to_string())}
                        </div>
                        <div class="stat-label">"Completed"</div>
                    </div>
                </div>
                <div class="stat-card">
                    <div class="stat-icon">"⏳"</div>
                    <div class="stat-info">
                        <div id="progress-count" class="stat-number">
                            {tile(|a| a.pending().to_string())}
                        </div>
                        <div class="stat-label">"In Progress"</div>
                    </div>
                </div>
            </div>

            {move || error().map(|msg| view! { <div class="error-message">{msg}</div> })}

            <div class="dashboard-card quick-actions">
                <h3>"Quick Actions"</h3>
                <div class="quick-action-buttons">
                    <button class="action-btn primary" on:click=move |_| {
                        ctx.open_modal(ModalKind::TaskForm(None));
                    }>
                        "+ New Task"
                    </button>
                    <button class="action-btn" on:click=move |_| {
                        ctx.open_modal(ModalKind::ProjectForm(None));
                    }>
                        "+ New Project"
                    </button>
                    <button class="action-btn" on:click=move |_| {
                        ctx.open_modal(ModalKind::NoteForm(None));
                    }>
                        "+ New Note"
                    </button>
                    <button class="action-btn" on:click=move |_| ctx.navigate(Route::Tasks.name())>
                        "View All Tasks"
                    </button>
                </div>
            </div>
        </PageSection>
    }
}
