//! Analytics Page
//!
//! Completion summary, stat cards and the text report export.

use leptos::prelude::*;

use super::{FilterButtons, PageSection};
use crate::actions::export_report;
use crate::context::use_app_context;
use crate::filters::AnalyticsRange;
use crate::render::{completion_line, render_analytics_stats, render_loadable};
use crate::router::Route;
use crate::store::AppStateStoreFields;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let summary = move || {
        store
            .analytics()
            .with(|state| state.loaded().map(completion_line).unwrap_or_default())
    };
    let stats_html = move || {
        store
            .analytics()
            .with(|state| render_loadable(state, "analytics", render_analytics_stats))
    };

    let range_options = AnalyticsRange::ALL.iter().map(|r| (*r, r.label())).collect::<Vec<_>>();

    view! {
        <PageSection route=Route::Analytics>
            <div class="page-header">
                <h2>"Analytics"</h2>
                <button class="action-btn" on:click=move |_| export_report(ctx)>
                    "Export Report"
                </button>
            </div>

            <div class="dashboard-card analytics-summary">
                <div class="card-header">
                    <h3>"Task Completion"</h3>
                    <FilterButtons
                        class="chart-controls"
                        options=range_options
                        current=Signal::derive(move || store.analytics_range().get())
                        on_select=Callback::new(move |range| store.analytics_range().set(range))
                    />
                </div>
                <p id="completion-summary" class="completion-summary">{summary}</p>
            </div>

            <div id="analytics-stats" class="stats-grid" inner_html=stats_html></div>
        </PageSection>
    }
}
