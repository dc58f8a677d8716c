//! Soundbar Core - service dispatch for networked soundbars.
//!
//! This crate turns named service calls (join, unjoin, preset, command,
//! snapshot, restore, play_track, sound_settings) into actions on registered
//! soundbar devices. It is designed to be embedded in any host, including
//! the standalone headless server.
//!
//! # Architecture
//!
//! - [`device`]: Device capability trait and sound settings
//! - [`registry`]: Live set of registered devices and entity filters
//! - [`services`]: Schema validation, typed requests, dispatcher, service host
//! - [`events`]: Observability events emitted during dispatch
//! - [`runtime`]: Task spawning abstraction for detached calls
//! - [`api`]: HTTP surface over the service host
//! - [`error`]: Centralized error types
//!
//! # Abstraction Traits
//!
//! - [`SoundbarDevice`](device::SoundbarDevice): Transport to one soundbar
//! - [`TaskSpawner`](runtime::TaskSpawner): Spawning background tasks
//! - [`DispatchEmitter`](events::DispatchEmitter): Emitting dispatch events

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod device;
pub mod error;
pub mod events;
pub mod protocol_constants;
pub mod registry;
pub mod runtime;
pub mod services;

// Re-export commonly used types at the crate root
pub use device::{DeviceAction, DeviceError, DeviceHandle, SoundSettings, SoundbarDevice};
pub use error::{DeviceResult, ErrorCode, ServiceError, ServiceResult, ValidationResult};
pub use events::{
    DispatchEmitter, DispatchEvent, LoggingDispatchEmitter, NoopDispatchEmitter, SkipReason,
};
pub use registry::{DeviceRegistry, EntityFilter, RegistrySnapshot};
pub use runtime::{TaskSpawner, TokioSpawner};
pub use services::schema::{is_valid_entity_id, normalize_entity_id, ValidationError};
pub use services::{
    CommandRequest, DispatchReport, Dispatcher, ServiceDescription, ServiceHost, ServiceKind,
    TargetOutcome,
};

// Re-export API types
pub use api::{http::create_router, start_server, AppState, ServerError};
