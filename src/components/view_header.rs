//! Page header with back navigation and an unsaved-changes marker.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Header shared by the editor views: a back button, the view title, and an
/// "(Edited)" marker once the view has committed a change.
#[component]
pub fn ViewHeader(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(into, optional)] edited: Option<Signal<bool>>,
) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <header class="view-header">
            <button
                class="view-header__back"
                on:click=move |_| navigate("/", NavigateOptions::default())
            >
                "← Back to Dashboard"
            </button>
            <div class="view-header__text">
                <h1 class="view-header__title">
                    {title}
                    {move || {
                        edited
                            .is_some_and(|e| e.get())
                            .then(|| {
                                view! { <span class="view-header__edited">" (Edited)"</span> }
                            })
                    }}
                </h1>
                {subtitle.map(|text| view! { <p class="view-header__subtitle">{text}</p> })}
            </div>
        </header>
    }
}
