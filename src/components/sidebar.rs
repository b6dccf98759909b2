//! Sidebar Navigation
//!
//! One nav item per route; the active one follows the router.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::router::Route;
use crate::store::AppStateStoreFields;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <aside class="sidebar" class:collapsed=move || store.sidebar_collapsed().get()>
            <div class="sidebar-brand">
                <span class="brand-mark">"⬆"</span>
                <span class="brand-name">"TaskLift"</span>
            </div>
            <nav>
                <ul class="nav-list">
                    {Route::ALL.into_iter().map(|route| view! { <NavItem route=route /> }).collect_view()}
                </ul>
            </nav>
        </aside>
    }
}

#[component]
fn NavItem(route: Route) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <li class="nav-item" class:active=move || ctx.current_route() == route>
            <a
                class="nav-link"
                href=route.fragment()
                data-route=route.name()
                on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(route.name());
                }
            >
                <span class="nav-icon">{route.icon()}</span>
                <span class="nav-label">{route.title()}</span>
            </a>
        </li>
    }
}
