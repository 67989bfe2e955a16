//! Taxonomy editor with an inline preview of the stored diagram image.

use leptos::prelude::*;

use crate::components::search_bar::SearchBar;
use crate::components::view_header::ViewHeader;
use crate::state::activity::{ActivityAction, ActivityLogState, record_activity};
use crate::state::drafts::TaxonomyDraft;
use crate::state::editor::EditorState;
use crate::state::toast::{ToastKind, ToastState};

const IMAGE_FORMATS: &[&str] = &["svg", "png", "jpg", "jpeg", "gif", "webp"];

/// Taxonomy view: rename the domain, switch the stored image format, and
/// download or preview the diagram itself.
#[component]
pub fn TaxonomyPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let activity = expect_context::<RwSignal<ActivityLogState>>();
    let editor = RwSignal::new(EditorState::<TaxonomyDraft>::default());
    let image_loading = RwSignal::new(false);
    let image_failed = RwSignal::new(false);

    let load = Callback::new(move |_| {
        editor.update(|e| {
            e.loading = true;
            e.error = None;
        });
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_taxonomies().await {
                Ok(taxonomies) => editor.update(|e| e.set_records(taxonomies)),
                Err(err) => {
                    leptos::logging::warn!("taxonomy load failed: {err}");
                    editor.update(|e| e.fail_load(err.to_string()));
                }
            }
        });
    });

    Effect::new(move || load.run(()));

    let on_save = Callback::new(move |_| {
        let state = editor.get();
        let Some(taxonomy) = state.selected().cloned() else {
            return;
        };
        let Some(draft) = state.draft else {
            return;
        };
        if draft.domain_name.trim().is_empty() {
            toasts.update(|t| {
                t.push(ToastKind::Error, "Domain name cannot be empty");
            });
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::update_taxonomy(
                &taxonomy.chapter_id,
                &taxonomy.domain_id,
                &draft.domain_name,
                &draft.image_format,
            )
            .await;
            match result {
                Ok(_) => {
                    let mut first = false;
                    editor.update(|e| first = e.commit());
                    if first {
                        activity.update(|log| {
                            record_activity(log, ActivityAction::Edited, "Taxonomy", "");
                        });
                    }
                    toasts.update(|t| {
                        t.push(ToastKind::Success, "Taxonomy updated successfully");
                    });
                }
                Err(err) => {
                    toasts.update(|t| {
                        t.push(ToastKind::Error, format!("Error updating taxonomy: {err}"));
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (taxonomy, draft, activity);
        }
    });

    let on_download = Callback::new(move |_| {
        let Some(taxonomy) = editor.get().selected().cloned() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_taxonomy_image(&taxonomy.id).await {
                Ok(bytes) => {
                    let filename =
                        format!("{}.{}", taxonomy.domain_id, taxonomy.image_format);
                    crate::util::download::save_binary_file(
                        &filename,
                        &bytes,
                        crate::util::download::image_mime(&taxonomy.image_format),
                    );
                }
                Err(err) => {
                    toasts.update(|t| {
                        t.push(ToastKind::Error, format!("Error downloading image: {err}"));
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = taxonomy;
        }
    });

    let on_copy_url = Callback::new(move |_| {
        let url = editor
            .get()
            .selected()
            .map(|t| crate::net::api::taxonomy_image_url(&t.id))
            .unwrap_or_default();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if crate::util::download::copy_text(&url).await {
                toasts.update(|t| {
                    t.push(ToastKind::Success, "Image URL copied to clipboard");
                });
            } else {
                toasts.update(|t| {
                    t.push(ToastKind::Error, "Failed to copy to clipboard");
                });
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
        }
    });

    view! {
        <div class="view-page">
            <ViewHeader
                title="Taxonomy Tool"
                edited=Signal::derive(move || editor.get().edited_once())
            />

            <SearchBar
                label="Search Taxonomies:"
                placeholder="Search by chapter ID, domain ID, domain name, or image format..."
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
                    view! { <div class="view-loading">"Loading all taxonomies data..."</div> }
                }
            >
                <div class="view-layout">
                    <aside class="record-list">
                        <h3 class="record-list__heading">
                            {move || format!("All Taxonomies ({})", editor.get().shown_total().0)}
                        </h3>
                        {move || {
                            let state = editor.get();
                            let filtered = state.filtered();
                            if filtered.is_empty() {
                                view! { <div class="record-list__empty">"No taxonomies found"</div> }
                                    .into_any()
                            } else {
                                let selected = state.selected_key.clone();
                                let items = filtered
                                    .into_iter()
                                    .map(|taxonomy| {
                                        let key = format!(
                                            "{}/{}",
                                            taxonomy.chapter_id,
                                            taxonomy.domain_id,
                                        );
                                        let active = selected.as_deref() == Some(key.as_str());
                                        let name = taxonomy.domain_name.clone();
                                        let id = taxonomy.domain_id.clone();
                                        let chapter = taxonomy.chapter_id.clone();
                                        let format = taxonomy.image_format.to_uppercase();
                                        view! {
                                            <button
                                                class=if active {
                                                    "record-item record-item--active"
                                                } else {
                                                    "record-item"
                                                }
                                                on:click=move |_| {
                                                    editor.update(|e| e.select(&key));
                                                    image_loading.set(true);
                                                    image_failed.set(false);
                                                }
                                            >
                                                <span class="record-item__id">{name}</span>
                                                <span class="record-item__meta">{id}</span>
                                                <span class="record-item__meta">{chapter}</span>
                                                <span class="record-item__preview">{format}</span>
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
                                        <h3>"Select a Taxonomy"</h3>
                                        <p>"Click on a taxonomy from the list to view and edit its details"</p>
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
                                                .map(|t| t.domain_name.clone())
                                                .unwrap_or_default()
                                        }}
                                    </h3>
                                    <div class="record-detail__stats">
                                        <span>
                                            {move || {
                                                editor
                                                    .get()
                                                    .selected()
                                                    .map(|t| format!("Domain ID: {}", t.domain_id))
                                                    .unwrap_or_default()
                                            }}
                                        </span>
                                        <span>
                                            {move || {
                                                editor
                                                    .get()
                                                    .selected()
                                                    .map(|t| format!("Chapter: {}", t.chapter_id))
                                                    .unwrap_or_default()
                                            }}
                                        </span>
                                        <span>
                                            {move || {
                                                editor
                                                    .get()
                                                    .selected()
                                                    .map(|t| format!("Format: {}", t.image_format))
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

                            <div class="record-detail__content record-detail__content--split">
                                <div class="detail-block">
                                    <h4>"Taxonomy Image"</h4>
                                    <div class="taxonomy-image">
                                        <Show when=move || image_loading.get()>
                                            <div class="taxonomy-image__loading">"Loading image..."</div>
                                        </Show>
                                        <Show when=move || image_failed.get()>
                                            <div class="taxonomy-image__failed">"Image failed to load"</div>
                                        </Show>
                                        <img
                                            src=move || {
                                                editor
                                                    .get()
                                                    .selected()
                                                    .map(|t| crate::net::api::taxonomy_image_url(&t.id))
                                                    .unwrap_or_default()
                                            }
                                            alt=move || {
                                                editor
                                                    .get()
                                                    .selected()
                                                    .map(|t| format!("Taxonomy for {}", t.domain_name))
                                                    .unwrap_or_default()
                                            }
                                            style:display=move || {
                                                if image_loading.get() || image_failed.get() {
                                                    "none"
                                                } else {
                                                    "block"
                                                }
                                            }
                                            on:load=move |_| image_loading.set(false)
                                            on:error=move |_| {
                                                image_loading.set(false);
                                                image_failed.set(true);
                                            }
                                        />
                                    </div>
                                </div>

                                <div class="detail-block">
                                    <h4>"Taxonomy Details"</h4>
                                    <div class="detail-grid">
                                        <div class="detail-item">
                                            <label>"Domain Name"</label>
                                            <Show
                                                when=move || editor.get().editing
                                                fallback=move || {
                                                    view! {
                                                        <div class="record-detail__display">
                                                            {move || {
                                                                editor
                                                                    .get()
                                                                    .selected()
                                                                    .map(|t| t.domain_name.clone())
                                                                    .unwrap_or_default()
                                                            }}
                                                        </div>
                                                    }
                                                }
                                            >
                                                <input
                                                    type="text"
                                                    class="record-detail__input"
                                                    placeholder="Enter domain name..."
                                                    prop:value=move || {
                                                        editor
                                                            .get()
                                                            .draft
                                                            .map(|d| d.domain_name)
                                                            .unwrap_or_default()
                                                    }
                                                    on:input=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        editor.update(move |e| {
                                                            e.update_draft(move |d| d.domain_name = value)
                                                        });
                                                    }
                                                />
                                            </Show>
                                        </div>

                                        <div class="detail-item">
                                            <label>"Image Format"</label>
                                            <Show
                                                when=move || editor.get().editing
                                                fallback=move || {
                                                    view! {
                                                        <div class="record-detail__display">
                                                            {move || {
                                                                editor
                                                                    .get()
                                                                    .selected()
                                                                    .map(|t| t.image_format.to_uppercase())
                                                                    .unwrap_or_default()
                                                            }}
                                                        </div>
                                                    }
                                                }
                                            >
                                                <select
                                                    class="record-detail__input"
                                                    prop:value=move || {
                                                        editor
                                                            .get()
                                                            .draft
                                                            .map(|d| d.image_format)
                                                            .unwrap_or_default()
                                                    }
                                                    on:change=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        editor.update(move |e| {
                                                            e.update_draft(move |d| d.image_format = value)
                                                        });
                                                    }
                                                >
                                                    {IMAGE_FORMATS
                                                        .iter()
                                                        .map(|format| {
                                                            view! {
                                                                <option value=*format>
                                                                    {format.to_uppercase()}
                                                                </option>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </select>
                                            </Show>
                                        </div>

                                        <div class="detail-item">
                                            <label>"Domain ID"</label>
                                            <div class="record-detail__display record-detail__display--muted">
                                                {move || {
                                                    editor
                                                        .get()
                                                        .selected()
                                                        .map(|t| t.domain_id.clone())
                                                        .unwrap_or_default()
                                                }}
                                            </div>
                                        </div>

                                        <div class="detail-item">
                                            <label>"Chapter ID"</label>
                                            <div class="record-detail__display record-detail__display--muted">
                                                {move || {
                                                    editor
                                                        .get()
                                                        .selected()
                                                        .map(|t| t.chapter_id.clone())
                                                        .unwrap_or_default()
                                                }}
                                            </div>
                                        </div>

                                        <div class="detail-item detail-item--wide">
                                            <label>"Image URL"</label>
                                            <div class="url-line">
                                                <span class="url-line__text">
                                                    {move || {
                                                        editor
                                                            .get()
                                                            .selected()
                                                            .map(|t| {
                                                                crate::net::api::taxonomy_image_url(&t.id)
                                                            })
                                                            .unwrap_or_default()
                                                    }}
                                                </span>
                                                <button class="btn" on:click=move |_| on_copy_url.run(())>
                                                    "Copy"
                                                </button>
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        </Show>
                    </section>
                </div>
            </Show>
        </div>
    }
}
