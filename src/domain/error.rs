//! Error values shared by the domain and transport layers

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_CONFLICT: u16 = 409;
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

/// Parameters attached to an [`AppError`] for message templating.
pub type ErrorParams = HashMap<String, Value>;

/// Structured application error.
///
/// The serialized form carries the wire fields only. `location` and the
/// templating parameters live in memory and are never written out.
///
/// Identifiers follow the `domain.action.reason.app_error` convention, e.g.
/// `model.user.is_valid.email.app_error`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Error)]
#[serde(default)]
#[error("{location}: {message}, {detailed_error}")]
pub struct AppError {
    /// Machine-readable identifier
    pub id: String,
    /// Message shown to the end user, without debugging information
    pub message: String,
    /// Internal details to help the developer
    pub detailed_error: String,
    /// Correlation id of the request that failed, also sent as a header
    #[serde(skip_serializing_if = "String::is_empty")]
    pub request_id: String,
    /// HTTP status code equivalent
    #[serde(skip_serializing_if = "is_zero")]
    pub status_code: u16,
    /// Where the error was raised, in the form `Struct.method`
    #[serde(skip)]
    pub location: String,
    #[serde(skip)]
    params: Option<ErrorParams>,
}

fn is_zero(value: &u16) -> bool {
    *value == 0
}

impl AppError {
    /// Create a new error. The message starts out as the identifier.
    pub fn new(
        location: impl Into<String>,
        id: impl Into<String>,
        params: Option<ErrorParams>,
        details: impl Into<String>,
        status_code: u16,
    ) -> Self {
        let id = id.into();

        Self {
            message: id.clone(),
            id,
            detailed_error: details.into(),
            request_id: String::new(),
            status_code,
            location: location.into(),
            params,
        }
    }

    /// Internal server error helper
    pub fn internal(
        location: impl Into<String>,
        id: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self::new(location, id, None, details, STATUS_INTERNAL_SERVER_ERROR)
    }

    /// Attach the correlation id of the request that produced this error
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    /// Templating parameters, if any were given
    pub fn params(&self) -> Option<&ErrorParams> {
        self.params.as_ref()
    }

    /// Whether this error belongs to the bad-request class
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    /// Encode the wire fields as JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Decode an error from a JSON body.
    ///
    /// A body that cannot be decoded yields an internal error carrying the
    /// raw text.
    pub fn from_json(data: &[u8]) -> Result<Self, Self> {
        serde_json::from_slice(data).map_err(|_| {
            Self::internal(
                "AppErrorFromJson",
                "model.utils.decode_json.app_error",
                format!("body: {}", String::from_utf8_lossy(data)),
            )
        })
    }
}

/// Errors raised by services and storage collaborators
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        let detail = err.to_string();

        match err {
            DomainError::NotFound { .. } => AppError::new(
                "UserStore",
                "store.user.missing.app_error",
                None,
                detail,
                STATUS_NOT_FOUND,
            ),
            DomainError::Validation { .. } => AppError::new(
                "UserStore",
                "store.user.invalid.app_error",
                None,
                detail,
                STATUS_BAD_REQUEST,
            ),
            DomainError::Conflict { .. } => AppError::new(
                "UserStore",
                "store.user.save.conflict.app_error",
                None,
                detail,
                STATUS_CONFLICT,
            ),
            DomainError::Storage { .. } => {
                AppError::internal("UserStore", "store.user.app_error", detail)
            }
        }
    }
}
