//! Data transfer objects shared by the server and the client.
//!
//! Everything here is serialized over the wire with `serde` and documented for the OpenAPI
//! schema with `utoipa`.

pub mod api;
pub mod catalog;
pub mod request;
pub mod resource;
pub mod user;
pub mod validation;
