//! Dispatch observability events.
//!
//! This module provides:
//! - [`DispatchEmitter`] trait the dispatcher reports through
//! - [`DispatchEvent`] describing resolution decisions and device actions
//!
//! Every `Invoking` event is emitted before the device call it describes.

mod emitter;

pub use emitter::{DispatchEmitter, LoggingDispatchEmitter, NoopDispatchEmitter};

use serde::Serialize;
use uuid::Uuid;

use crate::device::DeviceAction;
use crate::services::ServiceKind;

/// Why a request ended without invoking any device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SkipReason {
    /// The join master is not in the registry.
    MasterNotFound { master: String },
    /// The filter resolved to no devices.
    NoTargets,
}

/// Events emitted while dispatching a single request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DispatchEvent {
    /// The entity filter was resolved against the registry.
    Resolved {
        #[serde(rename = "requestId")]
        request_id: Uuid,
        service: ServiceKind,
        /// Resolved entity ids in registry order.
        targets: Vec<String>,
    },
    /// The request performs no device action.
    Skipped {
        #[serde(rename = "requestId")]
        request_id: Uuid,
        service: ServiceKind,
        reason: SkipReason,
    },
    /// A device action is about to be invoked.
    Invoking {
        #[serde(rename = "requestId")]
        request_id: Uuid,
        #[serde(rename = "entityId")]
        entity_id: String,
        action: DeviceAction,
        /// Human-readable parameters of the action.
        detail: String,
    },
    /// A device action completed successfully.
    Completed {
        #[serde(rename = "requestId")]
        request_id: Uuid,
        #[serde(rename = "entityId")]
        entity_id: String,
        action: DeviceAction,
    },
    /// A device action failed; remaining targets are still processed.
    Failed {
        #[serde(rename = "requestId")]
        request_id: Uuid,
        #[serde(rename = "entityId")]
        entity_id: String,
        action: DeviceAction,
        error: String,
    },
}
