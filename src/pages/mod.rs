//! Route-level page components.
//!
//! The auth pages are public; everything else renders behind the session
//! guard. Each editor page owns an [`crate::state::editor::EditorState`]
//! over one record type.

pub mod activity_log;
pub mod dashboard;
pub mod definition;
pub mod domain_words;
pub mod forgot_password;
pub mod full_summary;
pub mod login;
pub mod reset_password;
pub mod section_summary;
pub mod signup;
pub mod taxonomy;
pub mod word_structure;
