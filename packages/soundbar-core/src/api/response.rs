//! HTTP response helper functions for consistent API responses.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Standard API success response with JSON data.
pub fn api_success<T: Serialize>(data: T) -> impl IntoResponse {
    (StatusCode::OK, Json(data))
}

/// Accepted response for work that continues in the background.
pub fn api_accepted<T: Serialize>(data: T) -> impl IntoResponse {
    (StatusCode::ACCEPTED, Json(data))
}
