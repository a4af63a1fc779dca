//! Network layer: wire types and the REST client for the `/api/v1` backend.

pub mod api;
pub mod types;
