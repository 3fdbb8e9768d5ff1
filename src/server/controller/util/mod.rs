//! Request extractors shared by the controllers.

pub mod extract;
