//! Test fixture modules for database and HTTP mock creation.
//!
//! - `auth` - Google ID tokens and the JWKS endpoint
//! - `catalog` - universities, domains, subjects, skills and exams
//! - `resource` - resources and resource requests
//! - `user` - user profiles

pub mod auth;
pub mod catalog;
pub mod resource;
pub mod user;
