//! Dashboard landing page: activity stats and the tool grid.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::activity::ActivityLogState;
use crate::state::session::SessionState;

/// (name, description, path) for each editor view reachable from the grid.
const TOOLS: &[(&str, &str, &str)] = &[
    (
        "Full Summary outputs",
        "View and edit complete chapter summaries",
        "/full-summary",
    ),
    (
        "Section Summary outputs",
        "View and edit individual section summaries",
        "/section-summary",
    ),
    (
        "Domain Word outputs",
        "View and edit domain-specific vocabulary words",
        "/domain-words",
    ),
    (
        "Taxonomy outputs",
        "Extract and manage important keywords",
        "/taxonomy",
    ),
    (
        "Word structure outputs",
        "Analyze word structures and patterns",
        "/word-structure",
    ),
    (
        "Definition outputs",
        "View detailed definitions, translations",
        "/definition",
    ),
];

/// Landing page behind the session gate. Logout tells the backend, clears
/// local session state, and returns to the login page.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let activity = expect_context::<RwSignal<ActivityLogState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let sidebar_open = RwSignal::new(false);

    let username = move || session.get().username.unwrap_or_default();
    let stats = move || activity.get().stats(&crate::util::time::day_key());

    let on_logout = Callback::new(move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if let Some(token) = crate::util::storage::session_token() {
                    crate::net::api::logout(&token).await;
                }
                crate::util::storage::clear_session();
                session.update(|s| s.clear());
                navigate("/login", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <div class="dashboard-header__left">
                    <button
                        class="dashboard-header__menu"
                        on:click=move |_| sidebar_open.update(|open| *open = !*open)
                    >
                        {move || if sidebar_open.get() { "✕" } else { "☰" }}
                    </button>
                    <h1 class="dashboard-header__title">"Evaluate Outputs"</h1>
                </div>
                <div class="dashboard-header__right">
                    <span class="dashboard-header__user">
                        {move || format!("Welcome, {}", username())}
                    </span>
                    <button class="btn" on:click=move |_| on_logout.run(())>
                        "Logout"
                    </button>
                </div>
            </header>

            <div class="dashboard-body">
                <aside class=move || {
                    if sidebar_open.get() { "sidebar sidebar--open" } else { "sidebar" }
                }>
                    <nav class="sidebar__nav">
                        <h3>"Navigation"</h3>
                        <ul>
                            <li>
                                <a class="sidebar__link sidebar__link--active" href="/">
                                    "Dashboard"
                                </a>
                            </li>
                            <li>
                                <a class="sidebar__link" href="/outputs">"Outputs & Activity"</a>
                            </li>
                            <li>
                                <a class="sidebar__link" href="#assembly">"Assembly"</a>
                            </li>
                            <li>
                                <a class="sidebar__link" href="#settings">"Settings"</a>
                            </li>
                        </ul>
                    </nav>
                </aside>

                <main class="dashboard-main">
                    <div class="stats-cards">
                        <div class="stats-card">
                            <span class="stats-card__label">"Total Edits"</span>
                            <span class="stats-card__count">{move || stats().total_edits}</span>
                        </div>
                        <div class="stats-card">
                            <span class="stats-card__label">"Today's Edits"</span>
                            <span class="stats-card__count">{move || stats().today_edits}</span>
                        </div>
                        <div class="stats-card">
                            <span class="stats-card__label">"Activity Log"</span>
                            <a class="stats-card__link" href="/outputs">"View Full Activity"</a>
                        </div>
                    </div>

                    <div class="tools-grid">
                        {TOOLS
                            .iter()
                            .map(|(name, description, path)| {
                                view! {
                                    <div class="tool-card">
                                        <h2 class="tool-card__title">{*name}</h2>
                                        <p class="tool-card__description">{*description}</p>
                                        <div class="tool-card__output">
                                            <h3>"Outputs"</h3>
                                            <a class="btn btn--primary" href=*path>"View"</a>
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </main>
            </div>
        </div>
    }
}
