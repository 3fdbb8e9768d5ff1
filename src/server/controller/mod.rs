//! HTTP controller endpoints for the DigiBridge web API.
//!
//! Controllers extract the caller with [`util::extract::AuthUser`] or
//! [`util::extract::AdminUser`], delegate to a service and return the result as JSON. All
//! handlers are documented with utoipa and registered in [`crate::server::router`].

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod request;
pub mod resource;
pub mod util;
