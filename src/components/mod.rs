//! Shared UI building blocks used across pages.

pub mod confirm_dialog;
pub mod guard;
pub mod search_bar;
pub mod toast_host;
pub mod view_header;
