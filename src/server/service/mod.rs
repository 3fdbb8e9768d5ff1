//! Service layer for business logic.
//!
//! Services validate input, enforce the business rules and coordinate repositories, running
//! multi-table writes inside a single transaction.

pub mod auth;
pub mod catalog;
pub mod request;
pub mod resource;
pub mod user;
