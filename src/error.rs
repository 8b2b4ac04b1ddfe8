use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Request-level failures. Every variant maps to a single status code and a
/// `{"detail": "..."}` body.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid authentication credentials")]
    InvalidToken,

    #[error("Authentication required for this action")]
    TeacherRequired,

    #[error("Invalid teacher credentials")]
    InvalidTeacher,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Already signed up for this activity")]
    AlreadySignedUp,

    #[error("Not registered for this activity")]
    NotRegistered,

    #[error("{0}")]
    Validation(String),

    #[error("Failed to update {0}")]
    WriteFailed(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidToken | AppError::TeacherRequired | AppError::InvalidTeacher => {
                StatusCode::UNAUTHORIZED
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AlreadySignedUp | AppError::NotRegistered | AppError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::WriteFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Database(ref e) => {
                error!("database error: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
