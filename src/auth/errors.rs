use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Missing authorization header")]
    MissingAuthHeader,
    #[error("Invalid authorization header format")]
    InvalidAuthHeaderFormat,
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let error_code = match self {
            AuthError::TokenExpired => "TOKEN_EXPIRED",
            AuthError::MissingAuthHeader | AuthError::InvalidAuthHeaderFormat => "MISSING_CREDENTIALS",
            AuthError::InvalidToken | AuthError::Jwt(_) => "INVALID_TOKEN",
        };

        let body = Json(json!({
            "error_code": error_code,
            "message": self.to_string(),
        }));

        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}
