//! Service-call entry point shared by every host surface.
//!
//! [`ServiceHost`] pairs schema validation with the [`Dispatcher`]. A call is
//! either awaited, returning the full [`DispatchReport`], or handed to a
//! [`TaskSpawner`] after validation so the caller only learns whether the
//! parameters were accepted.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::error::ServiceResult;
use crate::registry::DeviceRegistry;
use crate::runtime::{TaskSpawner, TokioSpawner};

use super::dispatcher::Dispatcher;
use super::report::DispatchReport;
use super::request::ServiceKind;
use super::schema::validate_call;

/// Public description of a declared service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceDescription {
    pub name: &'static str,
    /// `false` for services that are declared but rejected when called.
    pub supported: bool,
}

/// Validates and dispatches service calls.
pub struct ServiceHost<S: TaskSpawner = TokioSpawner> {
    dispatcher: Arc<Dispatcher>,
    spawner: S,
}

impl<S: TaskSpawner> ServiceHost<S> {
    pub fn new(dispatcher: Arc<Dispatcher>, spawner: S) -> Self {
        Self {
            dispatcher,
            spawner,
        }
    }

    pub fn dispatcher(&self) -> &Arc<Dispatcher> {
        &self.dispatcher
    }

    pub fn registry(&self) -> &Arc<DeviceRegistry> {
        self.dispatcher.registry()
    }

    /// Every service declared under the domain, in registration order.
    pub fn services(&self) -> Vec<ServiceDescription> {
        ServiceKind::ALL
            .into_iter()
            .map(|kind| ServiceDescription {
                name: kind.as_str(),
                supported: kind.is_supported(),
            })
            .collect()
    }

    /// Validates and dispatches a call, waiting for every device action.
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unknown or unsupported, or if its
    /// parameters fail validation. Device failures are reported in the
    /// returned [`DispatchReport`] instead.
    pub async fn call(&self, service: &str, data: &Value) -> ServiceResult<DispatchReport> {
        let request = validate_call(service, data)?;
        Ok(self.dispatcher.handle(request).await)
    }

    /// Validates a call and dispatches it in the background.
    ///
    /// Returns once the request is accepted; device outcomes are only logged.
    ///
    /// # Errors
    ///
    /// Same rejections as [`call`](Self::call).
    pub fn call_detached(&self, service: &str, data: &Value) -> ServiceResult<ServiceKind> {
        let request = validate_call(service, data)?;
        let kind = request.kind();
        let dispatcher = Arc::clone(&self.dispatcher);

        self.spawner.spawn(async move {
            let report = dispatcher.handle(request).await;
            let failed = report.failures().count();
            if failed > 0 {
                log::warn!(
                    "[Service] Detached {} ({}) finished with {}/{} failed action(s)",
                    report.service,
                    report.request_id,
                    failed,
                    report.targets.len()
                );
            }
        });

        Ok(kind)
    }
}
