//! Documents Page
//!
//! Placeholder: no backend storage exists, so upload only explains that.

use leptos::prelude::*;

use super::PageSection;
use crate::actions::upload_document;
use crate::router::Route;

#[component]
pub fn DocumentsPage() -> impl IntoView {
    view! {
        <PageSection route=Route::Documents>
            <div class="page-header">
                <h2>"Documents"</h2>
                <button class="action-btn primary" on:click=move |_| upload_document()>
                    "Upload Document"
                </button>
            </div>
            <div class="dashboard-card empty-state">
                <div class="empty-icon">"📁"</div>
                <p>"No documents yet."</p>
            </div>
        </PageSection>
    }
}
