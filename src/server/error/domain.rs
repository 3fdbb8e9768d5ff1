use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{
    api::{ErrorDto, ValidationErrorDto},
    validation::ValidationErrors,
};

/// Business rule violations raised by the service layer.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{entity} ID {id} not found")]
    NotFound { entity: &'static str, id: i32 },
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error("{entity} {category} ID {id} does not exist")]
    InvalidCategory {
        entity: &'static str,
        category: &'static str,
        id: i32,
    },
    #[error("{entity} named {name:?} already exists")]
    Duplicate { entity: &'static str, name: String },
    #[error("User ID {0} attempted to change their own role or delete themself")]
    SelfModification(i32),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { entity, .. } => {
                tracing::debug!("{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: format!("{} not found", entity),
                    }),
                )
                    .into_response()
            }
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorDto {
                    error: "Validation failed".to_string(),
                    fields: errors.fields,
                }),
            )
                .into_response(),
            Self::InvalidCategory { category, .. } => {
                let message = format!("Selected {} does not exist", category);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationErrorDto {
                        error: "Validation failed".to_string(),
                        fields: [("category".to_string(), message)].into_iter().collect(),
                    }),
                )
                    .into_response()
            }
            Self::Duplicate { entity, ref name } => {
                let message = format!("{} {:?} already exists", entity, name);
                tracing::debug!("{}", self);

                (StatusCode::CONFLICT, Json(ErrorDto { error: message })).into_response()
            }
            Self::SelfModification(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "You cannot change your own role or delete your own account"
                            .to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
