mod academic;
mod access;
mod moderation;
mod user;
