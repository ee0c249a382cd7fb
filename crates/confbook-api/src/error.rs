//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps ledger errors to HTTP status codes and returns JSON error bodies
//! with a machine-readable code and a human-readable message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use confbook_ledger::LedgerError;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// The error payload.
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g. "NOT_FOUND", "VALIDATION_ERROR").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Application-level error type that implements [`IntoResponse`].
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Request validation failed (422).
    #[error("validation error: {0}")]
    Validation(String),

    /// Not enough tickets remain (409).
    #[error("capacity exceeded: {0}")]
    Capacity(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code and machine-readable code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::Capacity(_) => (StatusCode::CONFLICT, "CAPACITY_EXCEEDED"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match &err {
            LedgerError::Validation(_) => Self::Validation(err.to_string()),
            LedgerError::Capacity { .. } => Self::Capacity(err.to_string()),
            LedgerError::NotFound(id) => Self::NotFound(format!("booking {id}")),
            LedgerError::Inconsistent(_) => Self::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confbook_core::{BookingId, ValidationError};

    #[test]
    fn ledger_errors_map_to_expected_statuses() {
        let validation: AppError =
            LedgerError::Validation(ValidationError::ZeroTickets).into();
        assert!(matches!(validation, AppError::Validation(_)));

        let capacity: AppError = LedgerError::Capacity {
            requested: 8,
            remaining: 7,
        }
        .into();
        assert!(matches!(capacity, AppError::Capacity(_)));

        let not_found: AppError = LedgerError::NotFound(BookingId::new(9)).into();
        assert!(matches!(not_found, AppError::NotFound(_)));
    }

    #[test]
    fn capacity_message_carries_counts() {
        let err: AppError = LedgerError::Capacity {
            requested: 8,
            remaining: 7,
        }
        .into();
        let msg = format!("{err}");
        assert!(msg.contains('8'));
        assert!(msg.contains('7'));
    }
}
