//! Long-lived client state shared across pages.

pub mod auth;
pub mod data;
