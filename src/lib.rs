//! # lexboard
//!
//! Leptos + WASM admin dashboard for reviewing and editing generated
//! lexical content: chapter and section summaries, domain vocabulary,
//! taxonomy diagrams, and word-structure metadata.
//!
//! Pages render behind a session guard; edits go straight to the content
//! backend as JSON and land in a locally persisted activity log.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
