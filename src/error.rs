use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unknown location: {0}")]
    UnknownLocation(String),
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InvalidRequest(ref e) => {
                tracing::warn!("Invalid request: {}", e);
                (StatusCode::BAD_REQUEST, e.clone())
            }
            AppError::UnknownLocation(ref name) => {
                tracing::info!("Unknown location rejected: {}", name);
                (
                    StatusCode::NOT_FOUND,
                    format!("Location '{}' is not registered", name),
                )
            }
        };

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::InvalidRequest("bad".into()), StatusCode::BAD_REQUEST),
            (AppError::UnknownLocation("atlantis".into()), StatusCode::NOT_FOUND),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_error_display() {
        let err = AppError::UnknownLocation("atlantis".to_string());
        assert_eq!(err.to_string(), "Unknown location: atlantis");
    }
}
