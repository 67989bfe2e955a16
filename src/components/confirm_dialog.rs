//! Modal confirmation for destructive actions.

use leptos::prelude::*;

/// Blocking dialog asking the user to confirm before a record is deleted.
/// Clicking the backdrop cancels.
#[component]
pub fn ConfirmDialog(
    title: &'static str,
    message: Signal<String>,
    confirm_label: &'static str,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__message">{move || message.get()}</p>
                <p class="dialog__hint">"This action cannot be undone."</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
