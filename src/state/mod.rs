//! Application state: the shared editor core, per-view drafts, and the
//! context-provided session, activity, and toast state.

pub mod activity;
pub mod drafts;
pub mod editor;
pub mod session;
pub mod toast;
