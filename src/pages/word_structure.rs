//! Word-structure metadata editor: a free-form string map per word.

use leptos::prelude::*;

use crate::components::search_bar::SearchBar;
use crate::components::view_header::ViewHeader;
use crate::state::activity::{ActivityAction, ActivityLogState, record_activity};
use crate::state::drafts::StructureDraft;
use crate::state::editor::EditorState;
use crate::state::toast::{ToastKind, ToastState};

/// Word-structure view over every domain word. Fields can be edited,
/// added by name, and removed; the whole map is saved at once.
#[component]
pub fn WordStructurePage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let activity = expect_context::<RwSignal<ActivityLogState>>();
    let editor = RwSignal::new(EditorState::<StructureDraft>::default());
    let new_field = RwSignal::new(String::new());

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

    let on_add_field = Callback::new(move |_| {
        let name = new_field.get().trim().to_owned();
        if name.is_empty() {
            return;
        }
        editor.update(move |e| {
            e.update_draft(move |d| {
                d.word_structure.entry(name).or_default();
            });
        });
        new_field.set(String::new());
    });

    let on_save = Callback::new(move |_| {
        let state = editor.get();
        let Some(word) = state.selected().cloned() else {
            return;
        };
        let Some(draft) = state.draft else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::update_word_structure(
                &word.chapter_id,
                &word.domain_id,
                &draft.word_structure,
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
                                "Word Structure",
                                &format!("Updated word structure for: {}", word.name),
                            );
                        });
                    }
                    toasts.update(|t| {
                        t.push(ToastKind::Success, "Word structure updated successfully");
                    });
                }
                Err(err) => {
                    toasts.update(|t| {
                        t.push(
                            ToastKind::Error,
                            format!("Error updating word structure: {err}"),
                        );
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (word, draft, activity, toasts);
        }
    });

    view! {
        <div class="view-page">
            <ViewHeader
                title="Word Structure Tool"
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
                fallback=|| view! { <div class="view-loading">"Loading domain words data..."</div> }
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
                                        let fields = word.word_structure.len();
                                        let preview = if fields > 0 {
                                            format!("{fields} structure fields")
                                        } else {
                                            "No structure data".to_owned()
                                        };
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
                                                <span class="record-item__preview">{preview}</span>
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
                                        <p>"Click on a domain word from the list to view and edit its word structure"</p>
                                    </div>
                                }
                            }
                        >
                            <div class="record-detail__header">
                                <div class="record-detail__title">
                                    <h3>"Word Structure"</h3>
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
                                                    .map(|w| format!("Domain ID: {}", w.domain_id))
                                                    .unwrap_or_default()
                                            }}
                                        </span>
                                        <span>
                                            {move || {
                                                editor
                                                    .get()
                                                    .selected()
                                                    .map(|w| format!("Word: {}", w.name))
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
                                <div class="detail-block">
                                    <h4>"Word Structure Details"</h4>
                                    <Show
                                        when=move || editor.get().editing
                                        fallback=move || {
                                            view! {
                                                <div class="structure">
                                                    {move || {
                                                        let fields = editor
                                                            .get()
                                                            .selected()
                                                            .map(|w| w.word_structure.clone())
                                                            .unwrap_or_default();
                                                        if fields.is_empty() {
                                                            view! {
                                                                <div class="structure__empty">
                                                                    "No word structure data available for this word."
                                                                </div>
                                                            }
                                                                .into_any()
                                                        } else {
                                                            fields
                                                                .into_iter()
                                                                .map(|(field, value)| {
                                                                    view! {
                                                                        <div class="structure__row">
                                                                            <strong>{format!("{field}:")}</strong>
                                                                            <span>{value}</span>
                                                                        </div>
                                                                    }
                                                                })
                                                                .collect::<Vec<_>>()
                                                                .into_any()
                                                        }
                                                    }}
                                                </div>
                                            }
                                        }
                                    >
                                        <div class="structure">
                                            <For
                                                each=move || {
                                                    editor
                                                        .get()
                                                        .draft
                                                        .map(|d| {
                                                            d.word_structure.into_iter().collect::<Vec<_>>()
                                                        })
                                                        .unwrap_or_default()
                                                }
                                                key=|(field, _)| field.clone()
                                                children=move |(field, _): (String, String)| {
                                                    let read_field = field.clone();
                                                    let remove_field = field.clone();
                                                    view! {
                                                        <div class="structure__row structure__row--edit">
                                                            <span class="structure__field">{field.clone()}</span>
                                                            <input
                                                                type="text"
                                                                placeholder="Field value"
                                                                prop:value=move || {
                                                                    editor
                                                                        .get()
                                                                        .draft
                                                                        .and_then(|d| {
                                                                            d.word_structure.get(&read_field).cloned()
                                                                        })
                                                                        .unwrap_or_default()
                                                                }
                                                                on:input=move |ev| {
                                                                    let value = event_target_value(&ev);
                                                                    let field = field.clone();
                                                                    editor
                                                                        .update(move |e| {
                                                                            e.update_draft(move |d| {
                                                                                d.word_structure.insert(field, value);
                                                                            })
                                                                        });
                                                                }
                                                            />
                                                            <button
                                                                class="btn btn--danger"
                                                                on:click=move |_| {
                                                                    let field = remove_field.clone();
                                                                    editor
                                                                        .update(move |e| {
                                                                            e.update_draft(move |d| {
                                                                                d.word_structure.remove(&field);
                                                                            })
                                                                        });
                                                                }
                                                            >
                                                                "Remove"
                                                            </button>
                                                        </div>
                                                    }
                                                }
                                            />
                                            <Show when=move || {
                                                editor
                                                    .get()
                                                    .draft
                                                    .map(|d| d.word_structure.is_empty())
                                                    .unwrap_or(true)
                                            }>
                                                <div class="structure__empty">
                                                    "No structure fields defined. Add one below."
                                                </div>
                                            </Show>
                                            <div class="structure__add">
                                                <input
                                                    type="text"
                                                    placeholder="New field name"
                                                    prop:value=move || new_field.get()
                                                    on:input=move |ev| {
                                                        new_field.set(event_target_value(&ev));
                                                    }
                                                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                                        if ev.key() == "Enter" {
                                                            ev.prevent_default();
                                                            on_add_field.run(());
                                                        }
                                                    }
                                                />
                                                <button
                                                    class="btn"
                                                    on:click=move |_| on_add_field.run(())
                                                >
                                                    "+ Add Field"
                                                </button>
                                            </div>
                                        </div>
                                    </Show>
                                </div>
                            </div>
                        </Show>
                    </section>
                </div>
            </Show>
        </div>
    }
}
