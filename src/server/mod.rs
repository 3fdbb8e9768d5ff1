//! Server application core modules.
//!
//! HTTP routing, Google sign-in with session tokens, the repository and service layers over
//! the SeaORM entities, and the startup helpers used by the binaries.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
