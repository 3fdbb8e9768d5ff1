//! Client-side state for a DigiBridge frontend.
//!
//! Everything here talks to the REST API through [`api::ApiClient`]; the selectors and the
//! submission pipeline are generic over small source and sink traits so they can be driven
//! by any transport.

pub mod api;
pub mod cascade;
pub mod store;
pub mod submission;
