use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::repositories::RepositoryError;

/// Failures surfaced by the service layer and the HTTP handlers.
///
/// Aggregates that exist but belong to another user are reported as
/// `NotFound` so callers cannot probe for foreign ids.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Block item not found")]
    BlockItemNotFound,
    #[error("Workout is already finished")]
    WorkoutFinished,
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
    #[error("Invalid path: {0}")]
    InvalidPath(#[from] PathRejection),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::BlockItemNotFound => "BLOCK_ITEM_NOT_FOUND",
            AppError::WorkoutFinished => "WORKOUT_FINISHED",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::InvalidBody(_) => "INVALID_BODY",
            AppError::InvalidPath(_) => "INVALID_PATH",
            AppError::Repository(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) | AppError::BlockItemNotFound => StatusCode::NOT_FOUND,
            AppError::WorkoutFinished => StatusCode::CONFLICT,
            AppError::Validation(_) | AppError::InvalidBody(_) | AppError::InvalidPath(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            AppError::Repository(err) => {
                tracing::error!(error = %err, "repository failure");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({
            "error_code": self.error_code(),
            "message": message,
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
