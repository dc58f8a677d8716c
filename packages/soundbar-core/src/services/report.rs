//! Per-target outcome report of a dispatched request.

use serde::Serialize;
use uuid::Uuid;

use crate::device::DeviceAction;

use super::ServiceKind;

/// Outcome of one device action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetOutcome {
    pub entity_id: String,
    pub action: DeviceAction,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Every device action a request performed, in invocation order.
///
/// A request that resolved to no targets has an empty report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchReport {
    pub request_id: Uuid,
    pub service: ServiceKind,
    pub targets: Vec<TargetOutcome>,
}

impl DispatchReport {
    pub(crate) fn new(service: ServiceKind) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            service,
            targets: Vec::new(),
        }
    }

    pub(crate) fn record_success(&mut self, entity_id: &str, action: DeviceAction) {
        self.targets.push(TargetOutcome {
            entity_id: entity_id.to_string(),
            action,
            success: true,
            error: None,
        });
    }

    pub(crate) fn record_failure(&mut self, entity_id: &str, action: DeviceAction, error: String) {
        self.targets.push(TargetOutcome {
            entity_id: entity_id.to_string(),
            action,
            success: false,
            error: Some(error),
        });
    }

    /// Returns `true` if no device action was invoked.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Returns `true` if every invoked action succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.targets.iter().all(|t| t.success)
    }

    /// Outcomes of failed actions.
    pub fn failures(&self) -> impl Iterator<Item = &TargetOutcome> {
        self.targets.iter().filter(|t| !t.success)
    }
}
