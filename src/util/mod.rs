//! Browser glue (storage, clock, downloads) and pure text/form helpers.

pub mod download;
pub mod storage;
pub mod text;
pub mod time;
pub mod validate;
