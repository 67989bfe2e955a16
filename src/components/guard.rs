//! Session gate wrapping every authenticated route.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionState, SessionStatus};

/// Wraps a page that requires a verified session.
///
/// While the stored token is being checked against the backend a holding
/// message renders; afterwards either the children show or the router
/// redirects to `/login`. The check runs once per app load, so navigating
/// between gated pages does not re-verify.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Resolve the stored token the first time a gated page mounts.
    Effect::new(move || {
        if session.get().status != SessionStatus::Checking {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let Some(token) = crate::util::storage::session_token() else {
                session.update(|s| s.clear());
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::verify_session(&token).await {
                    Ok(check) if check.valid => {
                        session.update(|s| s.authenticate(check.username));
                    }
                    Ok(_) | Err(crate::net::api::ApiError::Server(_)) => {
                        // The backend rejected the token, so drop it.
                        crate::util::storage::clear_session();
                        session.update(|s| s.clear());
                    }
                    Err(err) => {
                        // Transport trouble: keep the token for the next load
                        // but do not let the user through.
                        leptos::logging::warn!("session check failed: {err}");
                        session.update(|s| s.clear());
                    }
                }
            });
        }
    });

    // Redirect whenever the session resolves to anonymous.
    Effect::new(move || {
        if session.get().status == SessionStatus::Anonymous {
            navigate("/login", NavigateOptions::default());
        }
    });

    move || match session.get().status {
        SessionStatus::Checking => {
            view! { <div class="session-gate">"Verifying session..."</div> }.into_any()
        }
        SessionStatus::Authenticated => children().into_any(),
        SessionStatus::Anonymous => ().into_any(),
    }
}
