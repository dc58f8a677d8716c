//! Event emitter abstraction for decoupling dispatch from its log sink.
//!
//! The dispatcher depends on the [`DispatchEmitter`] trait rather than a
//! concrete sink, enabling testing and alternative observability backends.

use super::DispatchEvent;

/// Trait for emitting dispatch events without knowledge of the sink.
///
/// # Example
///
/// ```ignore
/// let dispatcher = Dispatcher::new(registry, Arc::new(LoggingDispatchEmitter));
/// ```
pub trait DispatchEmitter: Send + Sync {
    /// Emits a dispatch event.
    fn emit(&self, event: DispatchEvent);
}

/// No-op emitter for hosts that rely on plain logging only.
pub struct NoopDispatchEmitter;

impl DispatchEmitter for NoopDispatchEmitter {
    fn emit(&self, _event: DispatchEvent) {}
}

/// Logging emitter recording every event at debug level.
pub struct LoggingDispatchEmitter;

impl DispatchEmitter for LoggingDispatchEmitter {
    fn emit(&self, event: DispatchEvent) {
        tracing::debug!(?event, "dispatch_event");
    }
}
