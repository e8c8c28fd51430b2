use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        tracing::debug!(status = status.as_u16(), error = %self, "Request failed");

        (status, self.to_string()).into_response()
    }
}

/// Router fallback for any path without a registered handler.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
