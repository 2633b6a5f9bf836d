//! Translation of failures into HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{infrastructure::dto::http::ErrorDto, usecase::UseCaseError};

/// Error returned by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Mandatory body field absent (or JSON `null`)
    #[error("missing {0} param")]
    MissingParam(&'static str),

    /// Body is not JSON, or a field has the wrong JSON type
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    UseCase(#[from] UseCaseError),
}

impl ApiError {
    /// Status code and client-facing message for this error
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::MissingParam(_) | Self::InvalidBody(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::UseCase(err) => match err {
                UseCaseError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                UseCaseError::InvalidChatroomType(_) => (
                    StatusCode::BAD_REQUEST,
                    "A chatroom type must be either 'trial' or 'standard'".to_string(),
                ),
                UseCaseError::InvalidChatroomStatus(_) => (
                    StatusCode::BAD_REQUEST,
                    "A chatroom status must be either 'active' or 'suspended'".to_string(),
                ),
                UseCaseError::PersistenceDecode(_) => {
                    (StatusCode::BAD_REQUEST, "invalid entity key".to_string())
                }
                UseCaseError::AccountNotFound(id) => {
                    (StatusCode::NOT_FOUND, format!("account not found: {id}"))
                }
                UseCaseError::ChatroomNotFound(id) => {
                    (StatusCode::NOT_FOUND, format!("chatroom not found: {id}"))
                }
                UseCaseError::RoomLimitExceeded { .. } => (StatusCode::CONFLICT, err.to_string()),
                UseCaseError::UserAccessNotGranted { .. } => {
                    (StatusCode::FORBIDDEN, err.to_string())
                }
                UseCaseError::Repository(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                ),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected ({}): {}", status.as_u16(), self);
        }
        (status, Json(ErrorDto { error })).into_response()
    }
}

/// Unwrap a mandatory request field
pub fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ApiError> {
    value.ok_or(ApiError::MissingParam(field))
}
