//! Typed service requests.
//!
//! Each service has its own request struct; [`CommandRequest`] is the closed
//! set the dispatcher matches on. Requests are only built by
//! [`schema::validate`](super::schema::validate) or directly by Rust callers,
//! so the dispatcher never inspects an untyped parameter bag.

use std::fmt;

use serde::Serialize;

use crate::device::SoundSettings;
use crate::protocol_constants::{
    SERVICE_CMD, SERVICE_JOIN, SERVICE_LIST, SERVICE_PLAY, SERVICE_PRESET, SERVICE_REST,
    SERVICE_SNAP, SERVICE_SOUND, SERVICE_UNJOIN,
};
use crate::registry::EntityFilter;

/// Every service declared under the soundbar domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    Join,
    Unjoin,
    Preset,
    Command,
    Snapshot,
    Restore,
    GetTracks,
    PlayTrack,
    SoundSettings,
}

impl ServiceKind {
    /// All declared services in registration order.
    pub const ALL: [ServiceKind; 9] = [
        Self::Join,
        Self::Unjoin,
        Self::Preset,
        Self::Command,
        Self::Snapshot,
        Self::Restore,
        Self::GetTracks,
        Self::PlayTrack,
        Self::SoundSettings,
    ];

    /// Returns the service name as registered under the domain.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Join => SERVICE_JOIN,
            Self::Unjoin => SERVICE_UNJOIN,
            Self::Preset => SERVICE_PRESET,
            Self::Command => SERVICE_CMD,
            Self::Snapshot => SERVICE_SNAP,
            Self::Restore => SERVICE_REST,
            Self::GetTracks => SERVICE_LIST,
            Self::PlayTrack => SERVICE_PLAY,
            Self::SoundSettings => SERVICE_SOUND,
        }
    }

    /// Looks up a service by its registered name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// Whether calls to this service reach the dispatcher.
    ///
    /// `get_tracks` is declared but has no dispatch behavior.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::GetTracks)
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Groups the entities in `entities` under `master`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinRequest {
    pub master: String,
    pub entities: EntityFilter,
}

/// Dissolves groups among `entities`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnjoinRequest {
    pub entities: EntityFilter,
}

/// Recalls preset `preset` on every target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetRequest {
    pub entities: EntityFilter,
    pub preset: u32,
}

/// Passes `command` through to every target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommandRequest {
    pub entities: EntityFilter,
    pub command: String,
    pub notify: bool,
}

/// Captures playback state on every target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRequest {
    pub entities: EntityFilter,
    pub switch_input: bool,
}

/// Restores captured playback state on every target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreRequest {
    pub entities: EntityFilter,
}

/// Plays `track` on a single entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayTrackRequest {
    pub entity_id: String,
    pub track: String,
}

/// Applies sound settings to a single entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundSettingsRequest {
    pub entity_id: String,
    pub settings: SoundSettings,
}

/// A validated service call ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandRequest {
    Join(JoinRequest),
    Unjoin(UnjoinRequest),
    Preset(PresetRequest),
    Command(RawCommandRequest),
    Snapshot(SnapshotRequest),
    Restore(RestoreRequest),
    PlayTrack(PlayTrackRequest),
    SoundSettings(SoundSettingsRequest),
}

impl CommandRequest {
    /// The service this request was issued for.
    pub fn kind(&self) -> ServiceKind {
        match self {
            Self::Join(_) => ServiceKind::Join,
            Self::Unjoin(_) => ServiceKind::Unjoin,
            Self::Preset(_) => ServiceKind::Preset,
            Self::Command(_) => ServiceKind::Command,
            Self::Snapshot(_) => ServiceKind::Snapshot,
            Self::Restore(_) => ServiceKind::Restore,
            Self::PlayTrack(_) => ServiceKind::PlayTrack,
            Self::SoundSettings(_) => ServiceKind::SoundSettings,
        }
    }

    /// The filter used to resolve this request's targets.
    pub fn entity_filter(&self) -> EntityFilter {
        match self {
            Self::Join(r) => r.entities.clone(),
            Self::Unjoin(r) => r.entities.clone(),
            Self::Preset(r) => r.entities.clone(),
            Self::Command(r) => r.entities.clone(),
            Self::Snapshot(r) => r.entities.clone(),
            Self::Restore(r) => r.entities.clone(),
            Self::PlayTrack(r) => EntityFilter::single(r.entity_id.clone()),
            Self::SoundSettings(r) => EntityFilter::single(r.entity_id.clone()),
        }
    }
}
