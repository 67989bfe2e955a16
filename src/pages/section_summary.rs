//! Section summary editor: one free-text summary per section.

use leptos::prelude::*;

use crate::components::search_bar::SearchBar;
use crate::components::view_header::ViewHeader;
use crate::state::activity::{ActivityAction, ActivityLogState, record_activity};
use crate::state::drafts::SectionDraft;
use crate::state::editor::EditorState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::text::{char_count, word_count};

/// Section-summary view over every section of every chapter.
#[component]
pub fn SectionSummaryPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let activity = expect_context::<RwSignal<ActivityLogState>>();
    let editor = RwSignal::new(EditorState::<SectionDraft>::default());

    let load = Callback::new(move |_| {
        editor.update(|e| {
            e.loading = true;
            e.error = None;
        });
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_sections().await {
                Ok(sections) => editor.update(|e| e.set_records(sections)),
                Err(err) => {
                    leptos::logging::warn!("section load failed: {err}");
                    editor.update(|e| e.fail_load(err.to_string()));
                }
            }
        });
    });

    Effect::new(move || load.run(()));

    let current_text = move || editor.get().draft.map(|d| d.text).unwrap_or_default();

    let on_save = Callback::new(move |_| {
        let state = editor.get();
        let Some(section) = state.selected().cloned() else {
            return;
        };
        let Some(draft) = state.draft else {
            return;
        };
        if draft.text.trim().is_empty() {
            toasts.update(|t| {
                t.push(ToastKind::Error, "Text cannot be empty");
            });
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::replace_section_summary(
                &section.chapter_id,
                &section.section_id,
                &draft.text,
            )
            .await;
            match result {
                Ok(_) => {
                    let mut first = false;
                    editor.update(|e| first = e.commit());
                    if first {
                        activity.update(|log| {
                            record_activity(log, ActivityAction::Edited, "Section Summary", "");
                        });
                    }
                    toasts.update(|t| {
                        t.push(ToastKind::Success, "Section summary updated successfully");
                    });
                }
                Err(err) => {
                    toasts.update(|t| {
                        t.push(
                            ToastKind::Error,
                            format!("Error updating section summary: {err}"),
                        );
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (section, draft, activity);
        }
    });

    let on_copy = Callback::new(move |_| {
        let text = current_text();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if crate::util::download::copy_text(&text).await {
                toasts.update(|t| {
                    t.push(ToastKind::Success, "Section summary copied to clipboard");
                });
            } else {
                toasts.update(|t| {
                    t.push(ToastKind::Error, "Failed to copy to clipboard");
                });
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
        }
    });

    let on_download = Callback::new(move |_| {
        let state = editor.get();
        let Some(section) = state.selected().cloned() else {
            return;
        };
        let text = state.draft.map(|d| d.text).unwrap_or_default();
        let filename = format!(
            "{}_{}_summary.txt",
            section.chapter_id, section.section_id,
        );
        crate::util::download::save_text_file(&filename, &text, "text/plain");
    });

    view! {
        <div class="view-page">
            <ViewHeader
                title="Section Summary Tool"
                edited=Signal::derive(move || editor.get().edited_once())
            />

            <SearchBar
                label="Search Sections:"
                placeholder="Search by chapter ID, section ID, or content..."
                query=Signal::derive(move || editor.get().search)
                on_search=Callback::new(move |term| editor.update(|e| e.set_search(term)))
                shown=Signal::derive(move || editor.get().shown_total())
            />

            <Show when=move || editor.get().error.is_some()>
                <div class="load-error">
                    <span>{move || editor.get().error.unwrap_or_default()}</span>
                    <button class="btn" on:click=move |_| load.run(())>"Retry"</button>
                </div>
            </Show>

            <Show
                when=move || !editor.get().loading
                fallback=|| view! { <div class="view-loading">"Loading all sections data..."</div> }
            >
                <div class="view-layout">
                    <aside class="record-list">
                        <h3 class="record-list__heading">
                            {move || format!("All Sections ({})", editor.get().shown_total().0)}
                        </h3>
                        {move || {
                            let state = editor.get();
                            let filtered = state.filtered();
                            if filtered.is_empty() {
                                view! { <div class="record-list__empty">"No sections found"</div> }
                                    .into_any()
                            } else {
                                let selected = state.selected_key.clone();
                                let items = filtered
                                    .into_iter()
                                    .map(|section| {
                                        let key = format!(
                                            "{}/{}",
                                            section.chapter_id, section.section_id,
                                        );
                                        let active = selected.as_deref() == Some(key.as_str());
                                        let label = format!("Section {}", section.section_id);
                                        let chapter = section.chapter_id.clone();
                                        let preview: String =
                                            section.section_summary.chars().take(100).collect();
                                        view! {
                                            <button
                                                class=if active {
                                                    "record-item record-item--active"
                                                } else {
                                                    "record-item"
                                                }
                                                on:click=move |_| editor.update(|e| e.select(&key))
                                            >
                                                <span class="record-item__id">{label}</span>
                                                <span class="record-item__meta">{chapter}</span>
                                                <span class="record-item__preview">
                                                    {format!("{preview}...")}
                                                </span>
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>();
                                view! { <div class="record-list__items">{items}</div> }.into_any()
                            }
                        }}
                    </aside>

                    <section class="record-detail">
                        <Show
                            when=move || editor.get().selected_key.is_some()
                            fallback=|| {
                                view! {
                                    <div class="record-detail__empty">
                                        <h3>"Select a Section"</h3>
                                        <p>"Click on a section from the list to view and edit its summary"</p>
                                    </div>
                                }
                            }
                        >
                            <div class="record-detail__header">
                                <div class="record-detail__title">
                                    <h3>
                                        {move || {
                                            editor
                                                .get()
                                                .selected()
                                                .map(|s| format!("Section {}", s.section_id))
                                                .unwrap_or_default()
                                        }}
                                    </h3>
                                    <p class="record-detail__subtitle">
                                        {move || {
                                            editor
                                                .get()
                                                .selected()
                                                .map(|s| format!("Chapter: {}", s.chapter_id))
                                                .unwrap_or_default()
                                        }}
                                    </p>
                                    <div class="record-detail__stats">
                                        <span>
                                            {move || format!("{} words", word_count(&current_text()))}
                                        </span>
                                        <span>
                                            {move || {
                                                format!("{} characters", char_count(&current_text()))
                                            }}
                                        </span>
                                        <Show when=move || editor.get().dirty>
                                            <span class="record-detail__unsaved">"Unsaved Changes"</span>
                                        </Show>
                                    </div>
                                </div>
                                <div class="record-detail__actions">
                                    <Show
                                        when=move || editor.get().editing
                                        fallback=move || {
                                            view! {
                                                <button class="btn" on:click=move |_| on_copy.run(())>
                                                    "Copy"
                                                </button>
                                                <button class="btn" on:click=move |_| on_download.run(())>
                                                    "Download"
                                                </button>
                                                <button
                                                    class="btn btn--primary"
                                                    on:click=move |_| editor.update(|e| e.begin_edit())
                                                >
                                                    "Edit"
                                                </button>
                                            }
                                        }
                                    >
                                        <button
                                            class="btn btn--primary"
                                            disabled=move || !editor.get().dirty
                                            on:click=move |_| on_save.run(())
                                        >
                                            "Save"
                                        </button>
                                        <button
                                            class="btn"
                                            on:click=move |_| editor.update(|e| e.cancel_edit())
                                        >
                                            "Cancel"
                                        </button>
                                    </Show>
                                </div>
                            </div>

                            <div class="record-detail__content">
                                <Show
                                    when=move || editor.get().editing
                                    fallback=move || {
                                        view! {
                                            <div class="record-detail__display">{current_text}</div>
                                        }
                                    }
                                >
                                    <textarea
                                        class="record-detail__textarea"
                                        placeholder="Enter your section summary here..."
                                        prop:value=move || current_text()
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            editor.update(move |e| e.update_draft(move |d| d.text = value));
                                        }
                                    ></textarea>
                                </Show>
                            </div>
                        </Show>
                    </section>
                </div>
            </Show>
        </div>
    }
}
