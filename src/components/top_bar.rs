//! Top Bar
//!
//! Sidebar toggle, page title and the debounced task search.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn TopBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let debounce_ms = ctx.config().search_debounce_ms;

    let (search_text, set_search_text) = signal(String::new());
    let (focused, set_focused) = signal(false);
    // Bumped on every keystroke; only the newest timer may publish
    let generation = StoredValue::new(0u32);

    let on_search = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_search_text.set(value.clone());
        generation.update_value(|g| *g += 1);
        let mine = generation.get_value();
        spawn_local(async move {
            TimeoutFuture::new(debounce_ms).await;
            if generation.get_value() == mine {
                store.search_query().set(value);
            }
        });
    };

    view! {
        <header class="top-bar">
            <button
                class="sidebar-toggle"
                title="Toggle sidebar"
                on:click=move |_| store.sidebar_collapsed().update(|c| *c = !*c)
            >
                "☰"
            </button>
            <h1 class="page-title">{move || ctx.current_route().title()}</h1>
            <div class="search-box" class:focused=move || focused.get()>
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search tasks..."
                    prop:value=move || search_text.get()
                    on:input=on_search
                    on:focus=move |_| set_focused.set(true)
                    on:blur=move |_| set_focused.set(false)
                />
            </div>
        </header>
    }
}
