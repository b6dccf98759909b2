//! Page Section
//!
//! Wrapper for one route's content; only the current route's section is active.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::router::Route;

#[component]
pub fn PageSection(route: Route, children: Children) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section
            id=route.section_id()
            class="page-content"
            class:active=move || ctx.current_route() == route
        >
            {children()}
        </section>
    }
}
