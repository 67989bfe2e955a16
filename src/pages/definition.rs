//! Definition and translations editor, with an optional deep link that
//! preselects one word.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::search_bar::SearchBar;
use crate::components::view_header::ViewHeader;
use crate::state::activity::{ActivityAction, ActivityLogState, record_activity};
use crate::state::drafts::DefinitionDraft;
use crate::state::editor::EditorState;
use crate::state::toast::{ToastKind, ToastState};

/// Definition view over every domain word. Reached at `/definition` or at
/// `/definition/:chapter_id/:domain_id`, which selects that word as soon as
/// the collection arrives.
#[component]
pub fn DefinitionPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let activity = expect_context::<RwSignal<ActivityLogState>>();
    let editor = RwSignal::new(EditorState::<DefinitionDraft>::default());
    let params = use_params_map();

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

    // Deep link: once records are in and nothing is selected yet, follow the
    // route params.
    Effect::new(move || {
        let state = editor.get();
        if state.loading || state.selected_key.is_some() {
            return;
        }
        let map = params.read();
        let (Some(chapter), Some(domain)) = (map.get("chapter_id"), map.get("domain_id")) else {
            return;
        };
        editor.update(|e| e.select(&format!("{chapter}/{domain}")));
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
            let result = crate::net::api::update_definition(
                &word.chapter_id,
                &word.domain_id,
                &draft.definition,
                &draft.translations,
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
                                "Definition",
                                &format!(
                                    "Updated definition and translations for: {}",
                                    word.name,
                                ),
                            );
                        });
                    }
                    toasts.update(|t| {
                        t.push(
                            ToastKind::Success,
                            "Definition and translations updated successfully",
                        );
                    });
                }
                Err(err) => {
                    toasts.update(|t| {
                        t.push(ToastKind::Error, format!("Error updating definition: {err}"));
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
                title="Definition Tool"
                subtitle="View and edit definitions and translations"
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
                                        <p>"Click on a domain word from the list to view and edit its definition and translations"</p>
                                    </div>
                                }
                            }
                        >
                            <div class="record-detail__header">
                                <div class="record-detail__title">
                                    <h3>"Definition Details"</h3>
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
                                    <h4>"Definition"</h4>
                                    <Show
                                        when=move || editor.get().editing
                                        fallback=move || {
                                            view! {
                                                <div class="record-detail__display">
                                                    {move || {
                                                        editor
                                                            .get()
                                                            .selected()
                                                            .map(|w| w.definition.clone())
                                                            .unwrap_or_default()
                                                    }}
                                                </div>
                                            }
                                        }
                                    >
                                        <textarea
                                            class="record-detail__textarea record-detail__textarea--short"
                                            placeholder="Enter definition..."
                                            prop:value=move || {
                                                editor
                                                    .get()
                                                    .draft
                                                    .map(|d| d.definition)
                                                    .unwrap_or_default()
                                            }
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                editor
                                                    .update(move |e| {
                                                        e.update_draft(move |d| d.definition = value)
                                                    });
                                            }
                                        ></textarea>
                                    </Show>
                                </div>

                                <div class="detail-block">
                                    <h4>"Translations"</h4>
                                    <Show
                                        when=move || editor.get().editing
                                        fallback=move || {
                                            view! {
                                                <div class="translations">
                                                    {move || {
                                                        editor
                                                            .get()
                                                            .selected()
                                                            .map(|w| w.translations.clone())
                                                            .unwrap_or_default()
                                                            .into_iter()
                                                            .map(|(lang, value)| {
                                                                view! {
                                                                    <div class="translations__row">
                                                                        <strong>
                                                                            {format!("{}:", lang.to_uppercase())}
                                                                        </strong>
                                                                        <span>{value}</span>
                                                                    </div>
                                                                }
                                                            })
                                                            .collect::<Vec<_>>()
                                                    }}
                                                </div>
                                            }
                                        }
                                    >
                                        <div class="translations">
                                            <For
                                                each=move || {
                                                    editor
                                                        .get()
                                                        .draft
                                                        .map(|d| {
                                                            d.translations.into_iter().collect::<Vec<_>>()
                                                        })
                                                        .unwrap_or_default()
                                                }
                                                key=|(lang, _)| lang.clone()
                                                children=move |(lang, _): (String, String)| {
                                                    let label = format!("{}:", lang.to_uppercase());
                                                    let read_lang = lang.clone();
                                                    view! {
                                                        <label class="translations__row">
                                                            <span class="translations__lang">{label}</span>
                                                            <input
                                                                type="text"
                                                                prop:value=move || {
                                                                    editor
                                                                        .get()
                                                                        .draft
                                                                        .and_then(|d| {
                                                                            d.translations.get(&read_lang).cloned()
                                                                        })
                                                                        .unwrap_or_default()
                                                                }
                                                                on:input=move |ev| {
                                                                    let value = event_target_value(&ev);
                                                                    let lang = lang.clone();
                                                                    editor
                                                                        .update(move |e| {
                                                                            e.update_draft(move |d| {
                                                                                d.translations.insert(lang, value);
                                                                            })
                                                                        });
                                                                }
                                                            />
                                                        </label>
                                                    }
                                                }
                                            />
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
