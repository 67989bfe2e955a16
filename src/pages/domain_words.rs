//! Domain word id editor with delete support.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::search_bar::SearchBar;
use crate::components::view_header::ViewHeader;
use crate::state::activity::{ActivityAction, ActivityLogState, record_activity};
use crate::state::drafts::DomainIdDraft;
use crate::state::editor::EditorState;
use crate::state::toast::{ToastKind, ToastState};

/// Domain-words view: rename a word's domain id or delete the word.
#[component]
pub fn DomainWordsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let activity = expect_context::<RwSignal<ActivityLogState>>();
    let editor = RwSignal::new(EditorState::<DomainIdDraft>::default());
    let show_delete = RwSignal::new(false);

    let load = Callback::new(move |_| {
        editor.update(|e| {
            e.loading = true;
            e.error = None;
        });
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_domain_words().await {
                Ok(words) => editor.update(|e| e.set_records(words)),
                Err(err) => {
                    leptos::logging::warn!("domain word load failed: {err}");
                    editor.update(|e| e.fail_load(err.to_string()));
                }
            }
        });
    });

    Effect::new(move || load.run(()));

    let current_id = move || editor.get().draft.map(|d| d.domain_id).unwrap_or_default();

    let on_save = Callback::new(move |_| {
        let state = editor.get();
        let Some(word) = state.selected().cloned() else {
            return;
        };
        let Some(draft) = state.draft else {
            return;
        };
        if draft.domain_id.trim().is_empty() {
            toasts.update(|t| {
                t.push(ToastKind::Error, "Domain ID cannot be empty");
            });
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // The path still addresses the record by its current id; the new
            // id travels in the body.
            let result = crate::net::api::update_domain_id(
                &word.chapter_id,
                &word.domain_id,
                &draft.domain_id,
            )
            .await;
            match result {
                Ok(_) => {
                    let mut first = false;
                    editor.update(|e| first = e.commit());
                    if first {
                        activity.update(|log| {
                            record_activity(
                                log,
                                ActivityAction::Edited,
                                "Domain Words",
                                &format!("Updated domain ID to: {}", draft.domain_id),
                            );
                        });
                    }
                    toasts.update(|t| {
                        t.push(ToastKind::Success, "Domain ID updated successfully");
                    });
                }
                Err(err) => {
                    toasts.update(|t| {
                        t.push(ToastKind::Error, format!("Error updating domain ID: {err}"));
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (word, draft, activity);
        }
    });

    let on_delete = Callback::new(move |_| {
        show_delete.set(false);
        let state = editor.get();
        let Some(word) = state.selected().cloned() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_domain_word(&word.chapter_id, &word.domain_id).await {
                Ok(_) => {
                    let mut removed = None;
                    editor.update(|e| removed = e.remove_selected());
                    if let Some((gone, first)) = removed {
                        if first {
                            activity.update(|log| {
                                record_activity(
                                    log,
                                    ActivityAction::Deleted,
                                    "Domain Words",
                                    &format!("Deleted word: {} ({})", gone.name, gone.domain_id),
                                );
                            });
                        }
                    }
                    toasts.update(|t| {
                        t.push(ToastKind::Success, "Domain word deleted successfully");
                    });
                }
                Err(err) => {
                    toasts.update(|t| {
                        t.push(
                            ToastKind::Error,
                            format!("Error deleting domain word: {err}"),
                        );
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (word, activity);
        }
    });

    let on_copy = Callback::new(move |_| {
        let id = editor
            .get()
            .selected()
            .map(|w| w.domain_id.clone())
            .unwrap_or_default();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if crate::util::download::copy_text(&id).await {
                toasts.update(|t| {
                    t.push(ToastKind::Success, "Domain ID copied to clipboard");
                });
            } else {
                toasts.update(|t| {
                    t.push(ToastKind::Error, "Failed to copy to clipboard");
                });
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_download = Callback::new(move |_| {
        let Some(id) = editor.get().selected().map(|w| w.domain_id.clone()) else {
            return;
        };
        crate::util::download::save_text_file(&format!("{id}.txt"), &id, "text/plain");
    });

    let delete_message = Signal::derive(move || {
        editor
            .get()
            .selected()
            .map(|w| {
                format!(
                    "Are you sure you want to delete the domain word \"{}\" (ID: {})?",
                    w.name, w.domain_id,
                )
            })
            .unwrap_or_default()
    });

    view! {
        <div class="view-page">
            <ViewHeader
                title="Domain Words Tool"
                edited=Signal::derive(move || editor.get().edited_once())
            />

            <SearchBar
                label="Search Domain Words:"
                placeholder="Search by chapter ID, domain ID, word name, or definition..."
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
                fallback=|| {
                    view! { <div class="view-loading">"Loading all domain words data..."</div> }
                }
            >
                <div class="view-layout">
                    <aside class="record-list">
                        <h3 class="record-list__heading">
                            {move || format!("All Domain Words ({})", editor.get().shown_total().0)}
                        </h3>
                        {move || {
                            let state = editor.get();
                            let filtered = state.filtered();
                            if filtered.is_empty() {
                                view! {
                                    <div class="record-list__empty">"No domain words found"</div>
                                }
                                    .into_any()
                            } else {
                                let selected = state.selected_key.clone();
                                let items = filtered
                                    .into_iter()
                                    .map(|word| {
                                        let key = format!("{}/{}", word.chapter_id, word.domain_id);
                                        let active = selected.as_deref() == Some(key.as_str());
                                        let name = word.name.clone();
                                        let id = word.domain_id.clone();
                                        let chapter = word.chapter_id.clone();
                                        let preview: String =
                                            word.definition.chars().take(80).collect();
                                        view! {
                                            <button
                                                class=if active {
                                                    "record-item record-item--active"
                                                } else {
                                                    "record-item"
                                                }
                                                on:click=move |_| editor.update(|e| e.select(&key))
                                            >
                                                <span class="record-item__id">{name}</span>
                                                <span class="record-item__meta">{id}</span>
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
                                        <h3>"Select a Domain Word"</h3>
                                        <p>"Click on a domain word from the list to view and edit its domain ID"</p>
                                    </div>
                                }
                            }
                        >
                            <div class="record-detail__header">
                                <div class="record-detail__title">
                                    <h3>"Domain ID"</h3>
                                    <div class="record-detail__stats">
                                        <span>
                                            {move || {
                                                editor
                                                    .get()
                                                    .selected()
                                                    .map(|w| format!("Chapter: {}", w.chapter_id))
                                                    .unwrap_or_default()
                                            }}
                                        </span>
                                        <span>
                                            {move || {
                                                editor
                                                    .get()
                                                    .selected()
                                                    .map(|w| format!("Word Name: {}", w.name))
                                                    .unwrap_or_default()
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
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| show_delete.set(true)
                                                >
                                                    "Delete"
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
                                            <div class="record-detail__display record-detail__display--large">
                                                {move || {
                                                    editor
                                                        .get()
                                                        .selected()
                                                        .map(|w| w.domain_id.clone())
                                                        .unwrap_or_default()
                                                }}
                                            </div>
                                        }
                                    }
                                >
                                    <input
                                        type="text"
                                        class="record-detail__input"
                                        placeholder="Enter domain ID..."
                                        prop:value=move || current_id()
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            editor
                                                .update(move |e| {
                                                    e.update_draft(move |d| d.domain_id = value)
                                                });
                                        }
                                    />
                                </Show>
                            </div>
                        </Show>
                    </section>
                </div>
            </Show>

            <Show when=move || show_delete.get()>
                <ConfirmDialog
                    title="Confirm Delete"
                    message=delete_message
                    confirm_label="Delete"
                    on_confirm=on_delete
                    on_cancel=Callback::new(move |_| show_delete.set(false))
                />
            </Show>
        </div>
    }
}
