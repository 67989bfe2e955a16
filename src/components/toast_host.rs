//! Corner overlay rendering the toast queue.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

/// Renders every queued toast and dismisses each one after the auto-dismiss
/// window or on its close button.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = format!("toast {}", toast.kind.class());

                    #[cfg(feature = "hydrate")]
                    leptos::task::spawn_local(async move {
                        let wait = crate::state::toast::AUTO_DISMISS_MS;
                        gloo_timers::future::TimeoutFuture::new(wait).await;
                        toasts.update(|t| t.dismiss(id));
                    });

                    view! {
                        <div class=class>
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
