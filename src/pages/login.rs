//! Login form exchanging credentials for a session token.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::state::toast::{ToastKind, ToastState};

/// Login page. On success the token and username land in localStorage and
/// the router moves to the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let form_error = RwSignal::new(String::new());

    let submit = Callback::new(move |_| {
        let user = username.get();
        let pass = password.get();
        form_error.set(String::new());

        if user.trim().is_empty() || pass.is_empty() {
            form_error.set("Please fill in all fields".to_owned());
            return;
        }

        pending.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(user.trim(), &pass).await {
                    Ok(resp) => {
                        crate::util::storage::store_session(&resp.session_token, &resp.username);
                        session.update(|s| s.authenticate(resp.username));
                        toasts.update(|t| {
                            t.push(ToastKind::Success, "Login successful! Welcome back.");
                        });
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => {
                        pending.set(false);
                        form_error.set(err.to_string());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, pass, session, toasts);
            pending.set(false);
        }
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>

                <Show when=move || !form_error.get().is_empty()>
                    <div class="auth-card__error">{move || form_error.get()}</div>
                </Show>

                <form
                    class="auth-form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <label class="auth-form__field">
                        "Username"
                        <input
                            type="text"
                            placeholder="Enter your username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__field">
                        "Password"
                        <input
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <a class="auth-card__link auth-form__forgot" href="/forgot-password">
                        "Forgot your password?"
                    </a>

                    <button
                        class="btn btn--primary auth-form__submit"
                        type="submit"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>

                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a class="auth-card__link" href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
