//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::guard::RequireSession;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    activity_log::ActivityLogPage, dashboard::DashboardPage, definition::DefinitionPage,
    domain_words::DomainWordsPage, forgot_password::ForgotPasswordPage,
    full_summary::FullSummaryPage, login::LoginPage, reset_password::ResetPasswordPage,
    section_summary::SectionSummaryPage, signup::SignupPage, taxonomy::TaxonomyPage,
    word_structure::WordStructurePage,
};
use crate::state::activity::ActivityLogState;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing. The
/// auth pages are public; every content route sits behind the session guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let activity = RwSignal::new(ActivityLogState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(session);
    provide_context(activity);
    provide_context(toasts);

    // Reload the persisted activity log once the browser is up.
    Effect::new(move || {
        let entries = crate::util::storage::load_activity();
        if !entries.is_empty() {
            activity.update(|log| log.entries = entries);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/lexboard.css"/>
        <Title text="Lexboard"/>

        <ToastHost/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route
                    path=(StaticSegment("reset-password"), ParamSegment("token"))
                    view=ResetPasswordPage
                />

                <Route
                    path=StaticSegment("")
                    view=|| view! { <RequireSession><DashboardPage/></RequireSession> }
                />
                <Route
                    path=StaticSegment("full-summary")
                    view=|| view! { <RequireSession><FullSummaryPage/></RequireSession> }
                />
                <Route
                    path=StaticSegment("section-summary")
                    view=|| view! { <RequireSession><SectionSummaryPage/></RequireSession> }
                />
                <Route
                    path=StaticSegment("domain-words")
                    view=|| view! { <RequireSession><DomainWordsPage/></RequireSession> }
                />
                <Route
                    path=StaticSegment("taxonomy")
                    view=|| view! { <RequireSession><TaxonomyPage/></RequireSession> }
                />
                <Route
                    path=StaticSegment("definition")
                    view=|| view! { <RequireSession><DefinitionPage/></RequireSession> }
                />
                <Route
                    path=(
                        StaticSegment("definition"),
                        ParamSegment("chapter_id"),
                        ParamSegment("domain_id"),
                    )
                    view=|| view! { <RequireSession><DefinitionPage/></RequireSession> }
                />
                <Route
                    path=StaticSegment("word-structure")
                    view=|| view! { <RequireSession><WordStructurePage/></RequireSession> }
                />
                <Route
                    path=StaticSegment("outputs")
                    view=|| view! { <RequireSession><ActivityLogPage/></RequireSession> }
                />
            </Routes>
        </Router>
    }
}
