//! Network layer: wire types and the REST client.

pub mod api;
pub mod types;
