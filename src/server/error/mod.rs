//! Error types for the DigiBridge server.
//!
//! Domain-specific error enums (authentication, configuration, catalog and resource rules)
//! are aggregated into [`Error`]. All of them implement `IntoResponse` so controllers can
//! return them directly, and they use `thiserror` for the `Display` and `Error` impls.

pub mod auth;
pub mod config;
pub mod domain;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    model::{api::ErrorDto, validation::ValidationErrors},
    server::error::{auth::AuthError, config::ConfigError, domain::DomainError},
};

/// Main error type for the DigiBridge server.
///
/// Uses `#[from]` so the `?` operator converts domain and library errors automatically.
/// The `IntoResponse` implementation maps each error to the HTTP status API consumers see.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization failure.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// A business rule rejected the operation.
    #[error(transparent)]
    DomainError(#[from] DomainError),
    /// Internal error indicating a bug in DigiBridge's code.
    #[error("Internal error, this indicates a bug: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Failed to issue a session token.
    #[error(transparent)]
    JwtError(#[from] jsonwebtoken::errors::Error),
    /// Failed to bind or serve the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Self::DomainError(DomainError::Validation(errors))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures and rejected operations
/// - 401 Unauthorized - Missing or invalid credentials
/// - 403 Forbidden - Non-admin caller on an admin route
/// - 404 Not Found - Missing entity
/// - 409 Conflict - Unique constraint violation
/// - 500 Internal Server Error - Everything else, with the error logged
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::DomainError(err) => err.into_response(),
            Self::DbErr(err) if is_unique_violation(&err) => {
                tracing::debug!("{}", err);

                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: "An entry with that name already exists".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Whether `err` was raised by a unique constraint.
pub fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message so implementation details don't leak to
/// the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
