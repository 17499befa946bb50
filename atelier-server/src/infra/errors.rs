use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use atelier_core::AtelierError;

use crate::views;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, views::error_page(self.status, &self.message)).into_response()
    }
}

impl From<AtelierError> for AppError {
    fn from(err: AtelierError) -> Self {
        match err {
            AtelierError::Validation(msg) => Self::bad_request(msg),
            AtelierError::Conflict(msg) => Self::conflict(msg),
            AtelierError::Auth(msg) => Self::unauthorized(msg),
            AtelierError::NotFound(msg) => Self::not_found(msg),
            AtelierError::Database(err) => {
                tracing::error!(error = ?err, "database operation failed");
                Self::internal("Database operation failed")
            }
            other => {
                tracing::error!(error = %other, "request failed");
                Self::internal("Internal server error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_domain_errors_to_statuses() {
        let cases = [
            (AtelierError::Validation("v".into()), StatusCode::BAD_REQUEST),
            (AtelierError::Conflict("c".into()), StatusCode::CONFLICT),
            (AtelierError::Auth("a".into()), StatusCode::UNAUTHORIZED),
            (AtelierError::NotFound("n".into()), StatusCode::NOT_FOUND),
            (AtelierError::Internal("i".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(AppError::from(err).status, status);
        }
    }

    #[test]
    fn internal_details_are_not_exposed() {
        let err = AppError::from(AtelierError::Internal("secret path /var/db".into()));
        assert_eq!(err.message, "Internal server error");

        let err = AppError::from(AtelierError::Database(sqlx::Error::RowNotFound));
        assert_eq!(err.message, "Database operation failed");
    }
}
