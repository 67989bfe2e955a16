//! Filter input with a shown-of-total counter for record lists.

use leptos::prelude::*;

/// Search box driving a view's filtered record list.
#[component]
pub fn SearchBar(
    label: &'static str,
    placeholder: &'static str,
    query: Signal<String>,
    on_search: Callback<String>,
    shown: Signal<(usize, usize)>,
) -> impl IntoView {
    view! {
        <div class="search-bar">
            <label class="search-bar__label">{label}</label>
            <input
                class="search-bar__input"
                type="search"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| on_search.run(event_target_value(&ev))
            />
            <span class="search-bar__count">
                {move || {
                    let (shown, total) = shown.get();
                    format!("Showing {shown} of {total}")
                }}
            </span>
        </div>
    }
}
