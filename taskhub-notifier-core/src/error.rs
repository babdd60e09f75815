use crate::repository;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use notifier_contract::{ErrorResponse, FieldError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("user not exist")]
    UserNotExist,

    #[error("notification not exist")]
    NotificationNotExist,

    #[error("validation error")]
    Validation(Vec<FieldError>),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        let message = self.to_string();
        let (status, errors) = match self {
            Error::UserNotExist | Error::NotificationNotExist => (StatusCode::NOT_FOUND, None),
            Error::Validation(errors) => (StatusCode::BAD_REQUEST, Some(errors)),
            Error::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, None),
        };

        let body = ErrorResponse {
            success: false,
            message,
            errors,
        };

        (status, Json(body)).into_response()
    }
}
