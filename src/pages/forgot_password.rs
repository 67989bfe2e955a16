//! Two-step password-reset request: email form, then a confirmation screen.

use leptos::prelude::*;

use crate::util::validate::normalize_email;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Step {
    Request,
    Sent,
}

/// Forgot-password page. Step one posts the email; step two echoes where the
/// instructions went and offers a retry.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let step = RwSignal::new(Step::Request);
    let email = RwSignal::new(String::new());
    let sent_message = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let form_error = RwSignal::new(String::new());

    let submit = Callback::new(move |_| {
        form_error.set(String::new());

        let Some(address) = normalize_email(&email.get()) else {
            form_error.set("Please enter a valid email address".to_owned());
            return;
        };

        pending.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_password_reset(&address).await {
                Ok(resp) => {
                    // The backend only hands out reset tokens in its dev
                    // configuration; surface them for manual testing.
                    if let Some(token) = resp.development_token {
                        leptos::logging::log!("development reset token: {token}");
                    }
                    sent_message.set(resp.message);
                    pending.set(false);
                    step.set(Step::Sent);
                }
                Err(err) => {
                    pending.set(false);
                    form_error.set(err.to_string());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (address, sent_message);
            pending.set(false);
        }
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a class="auth-card__back" href="/login">"← Back to Login"</a>

                <Show
                    when=move || step.get() == Step::Sent
                    fallback=move || {
                        view! {
                            <h1>"Reset Your Password"</h1>
                            <p class="auth-card__subtitle">
                                "Enter your email address and we'll send you instructions to reset your password."
                            </p>

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
                                    "Email Address"
                                    <input
                                        type="email"
                                        placeholder="Enter your email address"
                                        prop:value=move || email.get()
                                        on:input=move |ev| email.set(event_target_value(&ev))
                                    />
                                </label>
                                <button
                                    class="btn btn--primary auth-form__submit"
                                    type="submit"
                                    disabled=move || pending.get()
                                >
                                    {move || {
                                        if pending.get() {
                                            "Sending Instructions..."
                                        } else {
                                            "Send Reset Instructions"
                                        }
                                    }}
                                </button>
                            </form>

                            <p class="auth-card__switch">
                                "Remember your password? "
                                <a class="auth-card__link" href="/login">"Back to Login"</a>
                            </p>
                        }
                    }
                >
                    <h1>"Check Your Email"</h1>
                    <p class="auth-card__subtitle">{move || sent_message.get()}</p>
                    <p class="auth-card__note">
                        "We've sent password reset instructions to: "
                        <strong>{move || email.get()}</strong>
                    </p>
                    <div class="auth-card__actions">
                        <a class="btn" href="/login">"Back to Login"</a>
                        <p class="auth-card__note">
                            "Didn't receive the email? Check your spam folder or "
                            <button
                                class="auth-card__link auth-card__link-button"
                                on:click=move |_| step.set(Step::Request)
                            >
                                "try again with a different email"
                            </button>
                        </p>
                    </div>
                </Show>
            </div>
        </div>
    }
}
