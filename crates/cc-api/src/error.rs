//! # ApiError
//!
//! Maps `AppError` onto HTTP. Validation failures are inline messages for
//! the form that sent them; storage and internal failures are logged here
//! and reported without detail.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cc_core::AppError;
use serde_json::json;
use tracing::error;

const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// - Validation: 422 Unprocessable Entity
    /// - Role gate: 401 Unauthorized
    /// - Slot read or write: 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::StorageReadError(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status.is_server_error() {
            error!(error = %self.0, "request failed");
            GENERIC_FAILURE
        } else {
            self.0.message()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        let status = |err: AppError| ApiError(err).status_code();

        assert_eq!(status(AppError::validation("x")), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(status(AppError::Unauthorized("x".into())), StatusCode::UNAUTHORIZED);
        assert_eq!(status(AppError::Internal("disk full".into())), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            status(AppError::StorageReadError("bad json".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn internal_details_are_not_exposed() {
        let response = ApiError(AppError::Internal("/var/data: permission denied".into())).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();

        assert_eq!(bytes, format!(r#"{{"error":"{GENERIC_FAILURE}"}}"#).as_bytes());
    }
}
