use sea_orm::DatabaseConnection;

use crate::server::service::auth::{google::GoogleVerifier, token::TokenService};

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub tokens: TokenService,
    pub google: GoogleVerifier,
}
