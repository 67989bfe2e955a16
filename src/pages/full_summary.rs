//! Chapter summary editor: one blank-line-separated text block per chapter.

use leptos::prelude::*;

use crate::components::search_bar::SearchBar;
use crate::components::view_header::ViewHeader;
use crate::state::activity::{ActivityAction, ActivityLogState, record_activity};
use crate::state::drafts::ChapterDraft;
use crate::state::editor::EditorState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::text::{char_count, paragraph_count, split_paragraphs, word_count};

/// Full-summary view over every chapter.
#[component]
pub fn FullSummaryPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let activity = expect_context::<RwSignal<ActivityLogState>>();
    let editor = RwSignal::new(EditorState::<ChapterDraft>::default());

    let load = Callback::new(move |_| {
        editor.update(|e| {
            e.loading = true;
            e.error = None;
        });
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_chapters().await {
                Ok(chapters) => editor.update(|e| e.set_records(chapters)),
                Err(err) => {
                    leptos::logging::warn!("chapter load failed: {err}");
                    editor.update(|e| e.fail_load(err.to_string()));
                }
            }
        });
    });

    Effect::new(move || load.run(()));

    let current_text = move || editor.get().draft.map(|d| d.text).unwrap_or_default();

    let on_save = Callback::new(move |_| {
        let state = editor.get();
        let Some(chapter) = state.selected().cloned() else {
            return;
        };
        let Some(draft) = state.draft else {
            return;
        };
        let sentences = split_paragraphs(&draft.text);
        if sentences.is_empty() {
            toasts.update(|t| {
                t.push(ToastKind::Error, "Text cannot be empty");
            });
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::replace_full_summary(&chapter.chapter_id, &sentences).await {
                Ok(_) => {
                    let mut first = false;
                    editor.update(|e| first = e.commit());
                    if first {
                        activity.update(|log| {
                            record_activity(log, ActivityAction::Edited, "Full Summary", "");
                        });
                    }
                    toasts.update(|t| {
                        t.push(ToastKind::Success, "Summary updated successfully");
                    });
                }
                Err(err) => {
                    toasts.update(|t| {
                        t.push(ToastKind::Error, format!("Error updating summary: {err}"));
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (chapter, sentences, activity);
        }
    });

    let on_copy = Callback::new(move |_| {
        let text = current_text();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if crate::util::download::copy_text(&text).await {
                toasts.update(|t| {
                    t.push(ToastKind::Success, "Summary copied to clipboard");
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
        let Some(chapter_id) = state.selected().map(|c| c.chapter_id.clone()) else {
            return;
        };
        let text = state.draft.map(|d| d.text).unwrap_or_default();
        crate::util::download::save_text_file(
            &format!("{chapter_id}_summary.txt"),
            &text,
            "text/plain",
        );
    });

    view! {
        <div class="view-page">
            <ViewHeader
                title="Full Summary Tool"
                edited=Signal::derive(move || editor.get().edited_once())
            />

            <SearchBar
                label="Search Chapters:"
                placeholder="Search by chapter ID or content..."
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
                fallback=|| view! { <div class="view-loading">"Loading all chapters data..."</div> }
            >
                <div class="view-layout">
                    <aside class="record-list">
                        <h3 class="record-list__heading">
                            {move || format!("All Chapters ({})", editor.get().shown_total().0)}
                        </h3>
                        {move || {
                            let state = editor.get();
                            let filtered = state.filtered();
                            if filtered.is_empty() {
                                view! { <div class="record-list__empty">"No chapters found"</div> }
                                    .into_any()
                            } else {
                                let selected = state.selected_key.clone();
                                let items = filtered
                                    .into_iter()
                                    .map(|chapter| {
                                        let id = chapter.chapter_id.clone();
                                        let count = chapter.full_summary.len();
                                        let active = selected.as_deref() == Some(id.as_str());
                                        let select_key = id.clone();
                                        view! {
                                            <button
                                                class=if active {
                                                    "record-item record-item--active"
                                                } else {
                                                    "record-item"
                                                }
                                                on:click=move |_| {
                                                    editor.update(|e| e.select(&select_key));
                                                }
                                            >
                                                <span class="record-item__id">{id}</span>
                                                <span class="record-item__meta">
                                                    {format!("{count} sentences")}
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
                                        <h3>"Select a Chapter"</h3>
                                        <p>"Click on a chapter from the list to view and edit its summary"</p>
                                    </div>
                                }
                            }
                        >
                            <div class="record-detail__header">
                                <div class="record-detail__title">
                                    <h3>
                                        {move || {
                                            format!(
                                                "Chapter: {}",
                                                editor.get().selected_key.unwrap_or_default(),
                                            )
                                        }}
                                    </h3>
                                    <div class="record-detail__stats">
                                        <span>
                                            {move || {
                                                format!("{} sentences", paragraph_count(&current_text()))
                                            }}
                                        </span>
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
                                            "Save All"
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
                                        placeholder="Enter your chapter summary here. Separate sentences with blank lines."
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
