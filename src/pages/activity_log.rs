//! Activity log and outputs overview.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::activity::{ActivityEntry, ActivityLogState};

/// Timeline of every recorded edit and delete, with aggregate counters and
/// a JSON export.
#[component]
pub fn ActivityLogPage() -> impl IntoView {
    let activity = expect_context::<RwSignal<ActivityLogState>>();
    let navigate = use_navigate();

    let stats = move || activity.get().stats(&crate::util::time::day_key());

    let on_export = Callback::new(move |_| {
        let filename = format!("activity-log-{}.json", crate::util::time::iso_date());
        crate::util::download::save_text_file(
            &filename,
            &activity.get().export_json(),
            "application/json",
        );
    });

    view! {
        <div class="view-page">
            <header class="view-header">
                <button
                    class="view-header__back"
                    on:click=move |_| navigate("/", NavigateOptions::default())
                >
                    "← Back to Dashboard"
                </button>
                <div class="view-header__text">
                    <h1 class="view-header__title">"Activity Log & Outputs"</h1>
                    <p>"Track all edits and activities across all tools"</p>
                </div>
                <button class="btn" on:click=move |_| on_export.run(())>"Export Logs"</button>
            </header>

            <div class="stats-overview">
                <div class="stat-item">
                    <span class="stat-item__value">{move || stats().total_edits}</span>
                    <span class="stat-item__label">"Total Activities"</span>
                </div>
                <div class="stat-item">
                    <span class="stat-item__value">{move || stats().today_edits}</span>
                    <span class="stat-item__label">"Today's Activities"</span>
                </div>
                <div class="stat-item">
                    <span class="stat-item__value">{move || stats().recent_tools.len()}</span>
                    <span class="stat-item__label">"Active Tools"</span>
                </div>
            </div>

            <section class="activity-log">
                <div class="activity-log__header">
                    <h2>"Recent Activities"</h2>
                    <span class="activity-log__count">
                        {move || {
                            format!("{} activities recorded", activity.get().entries.len())
                        }}
                    </span>
                </div>

                <Show
                    when=move || !activity.get().entries.is_empty()
                    fallback=|| {
                        view! {
                            <div class="activity-log__empty">
                                <h3>"No Activities Recorded"</h3>
                                <p>"Start using the tools to see activity history here"</p>
                            </div>
                        }
                    }
                >
                    <div class="activity-log__timeline">
                        <For
                            each=move || activity.get().entries
                            key=|entry| entry.id
                            children=move |entry: ActivityEntry| {
                                let description = (!entry.details.is_empty())
                                    .then(|| format!(": {}", entry.details));
                                view! {
                                    <div class="log-entry">
                                        <span class=format!(
                                            "log-entry__badge {}",
                                            entry.action.badge_class(),
                                        )>{entry.action.label()}</span>
                                        <div class="log-entry__details">
                                            <div class="log-entry__message">
                                                <span class="log-entry__user">{entry.user}</span>
                                                <span class="log-entry__action">
                                                    {entry.action.label()}
                                                </span>
                                                <span class="log-entry__tool">{entry.tool}</span>
                                                {description
                                                    .map(|text| {
                                                        view! {
                                                            <span class="log-entry__description">
                                                                {text}
                                                            </span>
                                                        }
                                                    })}
                                            </div>
                                            <div class="log-entry__time">{entry.timestamp}</div>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </section>
        </div>
    }
}
