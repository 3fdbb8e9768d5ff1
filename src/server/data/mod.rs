//! Data access layer repositories.
//!
//! One repository per table. Every repository is generic over `ConnectionTrait` so the same
//! code runs against a pooled connection or inside a transaction.

pub mod catalog;
pub mod request;
pub mod resource;
pub mod user;
