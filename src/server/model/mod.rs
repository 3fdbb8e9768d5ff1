//! Server application models and type definitions.
//!
//! Contains the shared application state handed to every handler and type aliases for the
//! SeaORM entity models.

pub mod app;
pub mod db;
