//! Password reset form reached from an emailed token link.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_params_map;

use crate::util::validate::password_issue;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
enum Outcome {
    #[default]
    None,
    Success,
    Error,
}

/// Reset page at `/reset-password/:token`. On success the message shows and
/// the router returns to `/login` after a short pause.
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let params = use_params_map();
    let token = move || params.read().get("token").unwrap_or_default();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let show_new = RwSignal::new(false);
    let show_confirm = RwSignal::new(false);
    let pending = RwSignal::new(false);
    let message = RwSignal::new(String::new());
    let outcome = RwSignal::new(Outcome::None);

    let submit = Callback::new(move |_| {
        message.set(String::new());
        outcome.set(Outcome::None);

        if let Some(issue) = password_issue(&new_password.get(), &confirm.get()) {
            message.set(issue.to_owned());
            outcome.set(Outcome::Error);
            return;
        }

        pending.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let token = token();
            let password = new_password.get();
            leptos::task::spawn_local(async move {
                match crate::net::api::reset_password(&token, &password).await {
                    Ok(resp) => {
                        message.set(resp.message);
                        outcome.set(Outcome::Success);
                        pending.set(false);
                        gloo_timers::future::TimeoutFuture::new(3_000).await;
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => {
                        message.set(err.to_string());
                        outcome.set(Outcome::Error);
                        pending.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token();
            pending.set(false);
        }
    });

    let message_class = move || match outcome.get() {
        Outcome::Success => "auth-card__message auth-card__message--success",
        _ => "auth-card__message auth-card__error",
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a class="auth-card__back" href="/login">"← Back to Login"</a>

                <h1>"Create New Password"</h1>
                <p class="auth-card__subtitle">"Enter your new password below"</p>

                <Show when=move || !message.get().is_empty()>
                    <div class=message_class>{move || message.get()}</div>
                </Show>

                <form
                    class="auth-form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <label class="auth-form__field">
                        "New Password"
                        <div class="auth-form__password">
                            <input
                                type=move || if show_new.get() { "text" } else { "password" }
                                placeholder="Enter your new password"
                                prop:value=move || new_password.get()
                                on:input=move |ev| new_password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="auth-form__toggle"
                                on:click=move |_| show_new.update(|v| *v = !*v)
                            >
                                {move || if show_new.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </label>
                    <label class="auth-form__field">
                        "Confirm Password"
                        <div class="auth-form__password">
                            <input
                                type=move || if show_confirm.get() { "text" } else { "password" }
                                placeholder="Confirm your new password"
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="auth-form__toggle"
                                on:click=move |_| show_confirm.update(|v| *v = !*v)
                            >
                                {move || if show_confirm.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </label>

                    <button
                        class="btn btn--primary auth-form__submit"
                        type="submit"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Resetting Password..." } else { "Reset Password" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
