//! Account creation form with a fixed domain list.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::toast::{ToastKind, ToastState};
use crate::util::validate::password_issue;

const DOMAIN_OPTIONS: &[(&str, &str)] = &[
    ("education", "Education"),
    ("healthcare", "Healthcare"),
    ("technology", "Technology"),
    ("finance", "Finance"),
    ("retail", "Retail"),
    ("manufacturing", "Manufacturing"),
    ("research", "Research"),
    ("government", "Government"),
    ("other", "Other"),
];

/// Signup page. Client-side checks run before the request: matching
/// passwords, minimum length, and a chosen domain.
#[component]
pub fn SignupPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let domain = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let form_error = RwSignal::new(String::new());

    let submit = Callback::new(move |_| {
        form_error.set(String::new());

        if let Some(issue) = password_issue(&password.get(), &confirm.get()) {
            form_error.set(issue.to_owned());
            return;
        }
        if domain.get().is_empty() {
            form_error.set("Please select a domain".to_owned());
            return;
        }

        pending.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let user = username.get();
            let mail = email.get();
            let pass = password.get();
            let dom = domain.get();
            leptos::task::spawn_local(async move {
                match crate::net::api::signup(&user, &mail, &pass, &dom).await {
                    Ok(_) => {
                        toasts.update(|t| {
                            t.push(
                                ToastKind::Success,
                                "Account created successfully! Please sign in.",
                            );
                        });
                        navigate("/login", NavigateOptions::default());
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
            let _ = toasts;
            pending.set(false);
        }
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <p class="auth-card__subtitle">"Sign up for a new account"</p>

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
                            placeholder="Choose a username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__field">
                        "Email"
                        <input
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__field">
                        "Domain"
                        <select
                            class="auth-form__select"
                            prop:value=move || domain.get()
                            on:change=move |ev| domain.set(event_target_value(&ev))
                        >
                            <option value="" disabled=true selected=move || domain.get().is_empty()>
                                "Select your domain"
                            </option>
                            {DOMAIN_OPTIONS
                                .iter()
                                .map(|(value, label)| {
                                    view! { <option value=*value>{*label}</option> }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="auth-form__field">
                        "Password"
                        <input
                            type="password"
                            placeholder="Create a password (min. 6 characters)"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__field">
                        "Confirm Password"
                        <input
                            type="password"
                            placeholder="Confirm your password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>

                    <button
                        class="btn btn--primary auth-form__submit"
                        type="submit"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Creating Account..." } else { "Create Account" }}
                    </button>
                </form>

                <p class="auth-card__switch">
                    "Already have an account? "
                    <a class="auth-card__link" href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
