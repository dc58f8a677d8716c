//! HTTP route handlers.
//!
//! All handlers are thin - they delegate to the service host.

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::api::response::{api_accepted, api_success};
use crate::api::AppState;
use crate::error::{ServiceError, ServiceResult};
use crate::protocol_constants::{DOMAIN, SERVICE_ID};
use crate::services::schema::ValidationError;

// ─────────────────────────────────────────────────────────────────────────────
// Request Types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ServiceCallParams {
    /// Wait for every device action before responding. Defaults to `true`.
    blocking: Option<bool>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Router
// ─────────────────────────────────────────────────────────────────────────────

/// Creates the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/entities", get(list_entities))
        .route("/api/services", get(list_services))
        .route("/api/services/{service}", post(call_service))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Liveness probe. Always returns 200 OK if the server is responding.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    api_success(json!({
        "status": "ok",
        "service": SERVICE_ID,
        "domain": DOMAIN,
        "entities": state.registry().len(),
    }))
}

/// Lists registered entities in registry order.
async fn list_entities(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.registry().snapshot();
    let entities: Vec<Value> = snapshot
        .devices()
        .iter()
        .map(|device| {
            json!({
                "entityId": device.entity_id(),
                "isGroupLeader": device.is_group_leader(),
            })
        })
        .collect();
    api_success(json!({ "entities": entities }))
}

async fn list_services(State(state): State<AppState>) -> impl IntoResponse {
    api_success(json!({
        "domain": DOMAIN,
        "services": state.host.services(),
    }))
}

/// Validates and dispatches a service call.
///
/// An empty body is an empty parameter bag. With `blocking=false` the call
/// is accepted once validated and dispatched in the background.
async fn call_service(
    State(state): State<AppState>,
    Path(service): Path<String>,
    Query(params): Query<ServiceCallParams>,
    body: Bytes,
) -> ServiceResult<Response> {
    let data = parse_service_data(&body)?;
    let blocking = params.blocking.unwrap_or(true);
    log::debug!("[Api] Service call {} (blocking={})", service, blocking);

    if blocking {
        let report = state.host.call(&service, &data).await?;
        Ok(api_success(report).into_response())
    } else {
        let kind = state.host.call_detached(&service, &data)?;
        Ok(api_accepted(json!({ "service": kind, "accepted": true })).into_response())
    }
}

fn parse_service_data(body: &[u8]) -> ServiceResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| {
        log::debug!("[Api] Rejected malformed service data: {}", e);
        ServiceError::InvalidRequest(ValidationError::ExpectedObject)
    })
}
