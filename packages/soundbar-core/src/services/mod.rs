//! Service-call handling.
//!
//! - [`schema`]: validation of untyped parameter bags into typed requests
//! - [`request`]: the typed request per service
//! - [`dispatcher`]: entity resolution and fan-out to devices
//! - [`host`]: the entry point pairing validation with dispatch

pub mod dispatcher;
pub mod host;
pub mod report;
pub mod request;
pub mod schema;

pub use dispatcher::Dispatcher;
pub use host::{ServiceDescription, ServiceHost};
pub use report::{DispatchReport, TargetOutcome};
pub use request::{
    CommandRequest, JoinRequest, PlayTrackRequest, PresetRequest, RawCommandRequest,
    RestoreRequest, ServiceKind, SnapshotRequest, SoundSettingsRequest, UnjoinRequest,
};
