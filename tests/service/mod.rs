//! Integration tests for the service layer against an in-memory SQLite database.

mod auth;
mod catalog;
mod request;
mod resource;
mod user;
