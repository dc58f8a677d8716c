//! Centralized error types for the soundbar core library.
//!
//! This module provides a unified error handling system that:
//! - Defines structured error types using `thiserror`
//! - Maps errors to appropriate HTTP status codes
//! - Implements `IntoResponse` for automatic JSON error responses
//!
//! Device failures never leave the dispatcher as errors; they are recorded
//! per target in a [`DispatchReport`](crate::services::DispatchReport).
//! Only service-call rejections (unknown name, unsupported service, invalid
//! parameters) reach the caller through [`ServiceError`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::device::DeviceError;
use crate::services::schema::ValidationError;

/// Trait for error types that provide machine-readable error codes.
///
/// Implement this trait to provide consistent error codes across different
/// error conversion paths.
pub trait ErrorCode {
    /// Returns a machine-readable error code for API responses.
    fn code(&self) -> &'static str;
}

impl ErrorCode for DeviceError {
    fn code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "device_transport_failed",
            Self::Rejected(_) => "device_rejected_command",
            Self::Unavailable(_) => "device_unavailable",
        }
    }
}

impl ErrorCode for ValidationError {
    fn code(&self) -> &'static str {
        match self {
            Self::ExpectedObject => "expected_object",
            Self::MissingField(_) => "missing_field",
            Self::ExtraField(_) => "extra_field",
            Self::InvalidEntityId(_) => "invalid_entity_id",
            Self::ExpectedSingleEntity(_) => "expected_single_entity",
            Self::InvalidBoolean { .. } => "invalid_boolean",
            Self::InvalidInteger { .. } => "invalid_integer",
            Self::NegativeInteger { .. } => "negative_integer",
            Self::ExpectedString(_) => "expected_string",
        }
    }
}

/// Errors returned to the caller of a service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No service with this name is declared under the domain.
    #[error("Unknown service: {0}")]
    UnknownService(String),

    /// The service is declared but has no dispatch behavior.
    #[error("Service not supported: {0}")]
    Unsupported(String),

    /// The parameter bag failed schema validation.
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] ValidationError),
}

impl ServiceError {
    /// Returns a machine-readable error code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownService(_) => "unknown_service",
            Self::Unsupported(_) => "service_not_supported",
            Self::InvalidRequest(e) => e.code(),
        }
    }

    /// Maps the error to an appropriate HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownService(_) => StatusCode::NOT_FOUND,
            Self::Unsupported(_) => StatusCode::NOT_IMPLEMENTED,
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Result Type Aliases
// ─────────────────────────────────────────────────────────────────────────────

// Re-export Result type aliases from their defining modules
pub use crate::device::DeviceResult;
pub use crate::services::schema::ValidationResult;

/// Convenient Result alias for service-call operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// JSON response body for error responses.
#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
    status: u16,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.code(),
            message: self.to_string(),
            status: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}
