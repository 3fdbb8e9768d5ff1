//! DigiBridge, a catalogue of educational resources filed under universities, skills and
//! exams, with moderated community submissions.
//!
//! - [`model`] holds the DTOs and validation shared by the server and the client.
//! - [`server`] is the axum API backed by SeaORM.
//! - [`client`] holds the state logic a frontend drives: cascading selectors, the submission
//!   pipeline, the resource store and the session store.

pub mod client;
pub mod model;
pub mod server;
