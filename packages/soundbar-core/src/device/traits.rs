//! Trait abstraction for soundbar device operations.
//!
//! The dispatcher depends on [`SoundbarDevice`] rather than a concrete
//! transport, so hardware clients, virtual devices and test doubles are
//! interchangeable.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use super::SoundSettings;

/// Errors reported by a device while executing an action.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// The device could not be reached or the exchange failed midway.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The device answered but refused the command.
    #[error("Command rejected: {0}")]
    Rejected(String),

    /// The device is known but currently cannot take commands.
    #[error("Device unavailable: {0}")]
    Unavailable(String),
}

/// Result type for device actions.
pub type DeviceResult<T> = Result<T, DeviceError>;

/// Shared handle to a registered device.
pub type DeviceHandle = Arc<dyn SoundbarDevice>;

/// Capability set of a soundbar entity.
///
/// Every action is a suspension point: implementations typically perform
/// network I/O against the amplifier.
#[async_trait]
pub trait SoundbarDevice: Send + Sync {
    /// Unique entity id, e.g. `media_player.living_room`.
    fn entity_id(&self) -> &str;

    /// Whether this device currently coordinates a group as its join target.
    fn is_group_leader(&self) -> bool;

    /// Makes every device in `clients` follow this device.
    ///
    /// Called once per join request with the whole client list.
    async fn join(&self, clients: &[DeviceHandle]) -> DeviceResult<()>;

    /// Dissolves the group led by this device.
    async fn unjoin_all(&self) -> DeviceResult<()>;

    /// Removes this device from whatever group it follows.
    async fn unjoin_self(&self) -> DeviceResult<()>;

    /// Recalls a stored preset.
    async fn preset(&self, preset: u32) -> DeviceResult<()>;

    /// Sends a raw command string to the device.
    ///
    /// # Arguments
    /// * `command` - Command passed through unchanged
    /// * `notify` - Whether the device should surface the result to the user
    async fn execute_command(&self, command: &str, notify: bool) -> DeviceResult<()>;

    /// Captures the current playback state so it can be restored later.
    ///
    /// # Arguments
    /// * `switch_input` - Whether to switch input away after capturing
    async fn snapshot(&self, switch_input: bool) -> DeviceResult<()>;

    /// Restores the playback state captured by the last snapshot.
    async fn restore(&self) -> DeviceResult<()>;

    /// Starts playback of a track.
    async fn play_track(&self, track: &str) -> DeviceResult<()>;

    /// Applies sound settings. Unset fields are left unchanged.
    async fn set_sound(&self, settings: &SoundSettings) -> DeviceResult<()>;
}

/// Device action invoked by the dispatcher, one per capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceAction {
    Join,
    UnjoinAll,
    UnjoinSelf,
    Preset,
    ExecuteCommand,
    Snapshot,
    Restore,
    PlayTrack,
    SetSound,
}

impl DeviceAction {
    /// Returns the action name used in logs and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Join => "join",
            Self::UnjoinAll => "unjoin_all",
            Self::UnjoinSelf => "unjoin_self",
            Self::Preset => "preset",
            Self::ExecuteCommand => "execute_command",
            Self::Snapshot => "snapshot",
            Self::Restore => "restore",
            Self::PlayTrack => "play_track",
            Self::SetSound => "set_sound",
        }
    }
}

impl fmt::Display for DeviceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
