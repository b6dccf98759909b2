//! Filter Button Group
//!
//! Exactly one button in the group is active at a time.

use leptos::prelude::*;

#[component]
pub fn FilterButtons<T>(
    #[prop(into)] class: String,
    options: Vec<(T, &'static str)>,
    current: Signal<T>,
    on_select: Callback<T>,
) -> impl IntoView
where
    T: Copy + PartialEq + Send + Sync + 'static,
{
    view! {
        <div class=class>
            {options
                .into_iter()
                .map(|(value, label)| {
                    view! {
                        <button
                            type="button"
                            class="filter-btn"
                            class:active=move || current.get() == value
                            on:click=move |_| on_select.run(value)
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
