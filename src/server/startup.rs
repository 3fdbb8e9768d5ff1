use axum::http::{header::CONTENT_TYPE, HeaderName, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;

use crate::server::{
    config::Config,
    controller::util::extract::AUTH_TOKEN_HEADER,
    error::{config::ConfigError, Error},
    model::app::AppState,
    service::auth::{google::GoogleVerifier, token::TokenService},
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the state shared by request handlers
pub fn build_state(config: &Config, db: DatabaseConnection) -> AppState {
    AppState {
        db,
        tokens: TokenService::new(&config.jwt_secret, config.jwt_expiry_hours),
        google: GoogleVerifier::new(&config.google_client_id, &config.google_jwks_url),
    }
}

/// Restrict cross-origin requests to the configured frontend origin
pub fn cors_layer(config: &Config) -> Result<CorsLayer, Error> {
    let origin = HeaderValue::from_str(&config.cors_origin)
        .map_err(|_| ConfigError::InvalidCorsOrigin(config.cors_origin.clone()))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(AUTH_TOKEN_HEADER)]))
}

/// Resolves when the process receives Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
