//! HTTP mapping for application errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(error_id = %self.id, request_id = %self.request_id, "{}", self);
        } else {
            tracing::debug!(error_id = %self.id, request_id = %self.request_id, "{}", self);
        }

        (status, Json(self)).into_response()
    }
}

/// Body returned for routes that exist in name only
#[derive(Debug, Clone, Serialize)]
pub struct ServerMessage {
    pub error: bool,
    pub message: String,
}

impl ServerMessage {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
        }
    }
}
