use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No x-auth-token header present on request")]
    MissingToken,
    #[error("Session token failed validation: {0}")]
    InvalidToken(jsonwebtoken::errors::Error),
    #[error("User ID {0} from a valid session token was not found in the database")]
    UserNotInDatabase(i32),
    #[error("User ID {0} attempted an admin action without the admin role")]
    NotAdmin(i32),
    #[error("Google ID token rejected: {0}")]
    InvalidGoogleToken(String),
    #[error("Google ID token signed with unknown key ID {0:?}")]
    UnknownSigningKey(String),
    #[error("Failed to fetch Google signing keys: {0}")]
    JwksFetchFailed(#[from] reqwest::Error),
}

impl AuthError {
    fn unauthorized(message: &str) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken => {
                tracing::debug!("{}", self);

                Self::unauthorized("No token, authorization denied")
            }
            Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);

                Self::unauthorized("Token is not valid")
            }
            Self::InvalidGoogleToken(_) | Self::UnknownSigningKey(_) => {
                tracing::debug!("{}", self);

                Self::unauthorized("Google sign-in could not be verified")
            }
            Self::NotAdmin(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Admin access required".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::JwksFetchFailed(_) => InternalServerError(self).into_response(),
        }
    }
}
