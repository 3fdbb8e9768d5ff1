//! Admin dashboard endpoints.
//!
//! Every handler takes an [`AdminUser`](crate::server::controller::util::extract::AdminUser)
//! so callers without the admin role are rejected with 403 before the handler body runs.

pub mod academic;
pub mod request;
pub mod resource;
pub mod taxonomy;
pub mod user;

pub static ADMIN_TAG: &str = "admin";
