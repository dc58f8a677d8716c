//! Shared test doubles for device-facing tests.
//!
//! [`MockDevice`] records every action into a [`CallLog`] shared across all
//! devices of a test, so cross-device ordering can be asserted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{DeviceError, DeviceHandle, DeviceResult, SoundSettings, SoundbarDevice};
use crate::registry::DeviceRegistry;

/// A single recorded device action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Join(Vec<String>),
    UnjoinAll,
    UnjoinSelf,
    Preset(u32),
    ExecuteCommand(String, bool),
    Snapshot(bool),
    Restore,
    PlayTrack(String),
    SetSound(SoundSettings),
}

/// Ordered log of `(entity_id, call)` pairs.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<(String, Call)>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, entity_id: &str, call: Call) {
        self.0.lock().push((entity_id.to_string(), call));
    }

    pub fn calls(&self) -> Vec<(String, Call)> {
        self.0.lock().clone()
    }

    pub fn calls_for(&self, entity_id: &str) -> Vec<Call> {
        self.0
            .lock()
            .iter()
            .filter(|(id, _)| id == entity_id)
            .map(|(_, call)| call.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }
}

/// Device double that records calls and optionally fails every action.
pub struct MockDevice {
    entity_id: String,
    leader: AtomicBool,
    fail: bool,
    log: CallLog,
}

impl MockDevice {
    pub fn new(entity_id: &str, log: &CallLog) -> Arc<Self> {
        Arc::new(Self {
            entity_id: entity_id.to_string(),
            leader: AtomicBool::new(false),
            fail: false,
            log: log.clone(),
        })
    }

    pub fn leader(entity_id: &str, log: &CallLog) -> Arc<Self> {
        let device = Self::new(entity_id, log);
        device.leader.store(true, Ordering::SeqCst);
        device
    }

    pub fn failing(entity_id: &str, log: &CallLog) -> Arc<Self> {
        Arc::new(Self {
            entity_id: entity_id.to_string(),
            leader: AtomicBool::new(false),
            fail: true,
            log: log.clone(),
        })
    }

    fn finish(&self, call: Call) -> DeviceResult<()> {
        self.log.record(&self.entity_id, call);
        if self.fail {
            Err(DeviceError::Transport(format!("{} unreachable", self.entity_id)))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SoundbarDevice for MockDevice {
    fn entity_id(&self) -> &str {
        &self.entity_id
    }

    fn is_group_leader(&self) -> bool {
        self.leader.load(Ordering::SeqCst)
    }

    async fn join(&self, clients: &[DeviceHandle]) -> DeviceResult<()> {
        let ids = clients.iter().map(|c| c.entity_id().to_string()).collect();
        self.finish(Call::Join(ids))
    }

    async fn unjoin_all(&self) -> DeviceResult<()> {
        self.finish(Call::UnjoinAll)
    }

    async fn unjoin_self(&self) -> DeviceResult<()> {
        self.finish(Call::UnjoinSelf)
    }

    async fn preset(&self, preset: u32) -> DeviceResult<()> {
        self.finish(Call::Preset(preset))
    }

    async fn execute_command(&self, command: &str, notify: bool) -> DeviceResult<()> {
        self.finish(Call::ExecuteCommand(command.to_string(), notify))
    }

    async fn snapshot(&self, switch_input: bool) -> DeviceResult<()> {
        self.finish(Call::Snapshot(switch_input))
    }

    async fn restore(&self) -> DeviceResult<()> {
        self.finish(Call::Restore)
    }

    async fn play_track(&self, track: &str) -> DeviceResult<()> {
        self.finish(Call::PlayTrack(track.to_string()))
    }

    async fn set_sound(&self, settings: &SoundSettings) -> DeviceResult<()> {
        self.finish(Call::SetSound(settings.clone()))
    }
}

/// Builds a registry holding `devices` in the given order.
pub fn registry_of(devices: &[Arc<MockDevice>]) -> Arc<DeviceRegistry> {
    let registry = DeviceRegistry::new();
    for device in devices {
        let handle: DeviceHandle = device.clone();
        registry.insert(handle);
    }
    Arc::new(registry)
}
