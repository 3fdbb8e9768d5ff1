mod admin;
mod auth;
mod catalog;
mod request;
mod resource;
