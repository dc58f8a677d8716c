//! Fixed service-call constants that should NOT be changed.
//!
//! These names form the public service-call contract (service names and
//! parameter keys) and changing them would break existing callers.

// ─────────────────────────────────────────────────────────────────────────────
// Service Domain
// ─────────────────────────────────────────────────────────────────────────────

/// Domain under which all soundbar services are registered.
pub const DOMAIN: &str = "yamaha_soundbar";

/// Service identifier for health endpoint responses.
pub const SERVICE_ID: &str = "soundbar-server";

/// Entity filter value selecting every registered device.
pub const ENTITY_MATCH_ALL: &str = "all";

// ─────────────────────────────────────────────────────────────────────────────
// Service Names
// ─────────────────────────────────────────────────────────────────────────────

pub const SERVICE_JOIN: &str = "join";
pub const SERVICE_UNJOIN: &str = "unjoin";
pub const SERVICE_PRESET: &str = "preset";
pub const SERVICE_CMD: &str = "command";
pub const SERVICE_SNAP: &str = "snapshot";
pub const SERVICE_REST: &str = "restore";
pub const SERVICE_LIST: &str = "get_tracks";
pub const SERVICE_PLAY: &str = "play_track";
pub const SERVICE_SOUND: &str = "sound_settings";

// ─────────────────────────────────────────────────────────────────────────────
// Parameter Keys
// ─────────────────────────────────────────────────────────────────────────────

pub const ATTR_ENTITY_ID: &str = "entity_id";
pub const ATTR_MASTER: &str = "master";
pub const ATTR_PRESET: &str = "preset";
pub const ATTR_CMD: &str = "command";
pub const ATTR_NOTIF: &str = "notify";
pub const ATTR_SNAP: &str = "switchinput";
pub const ATTR_TRACK: &str = "track";

pub const ATTR_SOUND: &str = "sound_program";
pub const ATTR_SUB: &str = "subwoofer_volume";
pub const ATTR_SURROUND: &str = "surround";
pub const ATTR_VOICE: &str = "clear_voice";
pub const ATTR_BASS: &str = "bass_extension";
pub const ATTR_MUTE: &str = "mute";
pub const ATTR_POWER_SAVING: &str = "power_saving";

/// Every key carried by a sound settings request, in wire order.
pub const SOUND_SETTING_KEYS: [&str; 7] = [
    ATTR_SOUND,
    ATTR_SUB,
    ATTR_SURROUND,
    ATTR_VOICE,
    ATTR_BASS,
    ATTR_POWER_SAVING,
    ATTR_MUTE,
];

// ─────────────────────────────────────────────────────────────────────────────
// Service Call Defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Whether a raw command notifies the device UI when `notify` is omitted.
pub const DEFAULT_NOTIFY: bool = true;

/// Whether a snapshot switches input when `switchinput` is omitted.
pub const DEFAULT_SWITCH_INPUT: bool = true;
