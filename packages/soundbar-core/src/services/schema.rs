//! Parameter schema validation for service calls.
//!
//! Converts an untyped JSON parameter bag into a typed [`CommandRequest`].
//! Every service has a fixed set of required and optional keys; unknown keys
//! are rejected. A `null` value is treated the same as an absent key.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::device::SoundSettings;
use crate::error::{ServiceError, ServiceResult};
use crate::protocol_constants::{
    ATTR_BASS, ATTR_CMD, ATTR_ENTITY_ID, ATTR_MASTER, ATTR_MUTE, ATTR_NOTIF, ATTR_POWER_SAVING,
    ATTR_PRESET, ATTR_SNAP, ATTR_SOUND, ATTR_SUB, ATTR_SURROUND, ATTR_TRACK, ATTR_VOICE,
    DEFAULT_NOTIFY, DEFAULT_SWITCH_INPUT, ENTITY_MATCH_ALL,
};
use crate::registry::EntityFilter;

use super::request::{
    CommandRequest, JoinRequest, PlayTrackRequest, PresetRequest, RawCommandRequest,
    RestoreRequest, ServiceKind, SnapshotRequest, SoundSettingsRequest, UnjoinRequest,
};

/// Schema validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("service data must be an object")]
    ExpectedObject,

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("extra keys not allowed: {0}")]
    ExtraField(String),

    #[error("invalid entity id: {0}")]
    InvalidEntityId(String),

    #[error("{0} must be a single entity id")]
    ExpectedSingleEntity(&'static str),

    #[error("{field} is not a valid boolean: {value}")]
    InvalidBoolean { field: &'static str, value: String },

    #[error("{field} is not a valid integer: {value}")]
    InvalidInteger { field: &'static str, value: String },

    #[error("{field} must be at least 0, got {value}")]
    NegativeInteger { field: &'static str, value: i64 },

    #[error("{0} must be a string")]
    ExpectedString(&'static str),
}

/// Result type for schema validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Looks up a service by name and validates its parameter bag.
///
/// # Errors
/// - [`ServiceError::UnknownService`] if no such service is declared
/// - [`ServiceError::Unsupported`] for declared services without dispatch behavior
/// - [`ServiceError::InvalidRequest`] if the parameters fail validation
pub fn validate_call(service: &str, data: &Value) -> ServiceResult<CommandRequest> {
    let kind = ServiceKind::from_name(service)
        .ok_or_else(|| ServiceError::UnknownService(service.to_string()))?;
    validate(kind, data)
}

/// Validates the parameter bag of a known service.
pub fn validate(kind: ServiceKind, data: &Value) -> ServiceResult<CommandRequest> {
    let request = match kind {
        ServiceKind::Join => {
            let fields = Fields::new(data, &[ATTR_ENTITY_ID, ATTR_MASTER])?;
            CommandRequest::Join(JoinRequest {
                master: entity_id(fields.required(ATTR_MASTER)?, ATTR_MASTER)?,
                entities: fields.optional_entities()?,
            })
        }
        ServiceKind::Unjoin => {
            let fields = Fields::new(data, &[ATTR_ENTITY_ID])?;
            CommandRequest::Unjoin(UnjoinRequest {
                entities: fields.optional_entities()?,
            })
        }
        ServiceKind::Preset => {
            let fields = Fields::new(data, &[ATTR_ENTITY_ID, ATTR_PRESET])?;
            CommandRequest::Preset(PresetRequest {
                entities: fields.required_entities()?,
                preset: non_negative_int(fields.required(ATTR_PRESET)?, ATTR_PRESET)?,
            })
        }
        ServiceKind::Command => {
            let fields = Fields::new(data, &[ATTR_ENTITY_ID, ATTR_CMD, ATTR_NOTIF])?;
            CommandRequest::Command(RawCommandRequest {
                entities: fields.required_entities()?,
                command: string(fields.required(ATTR_CMD)?, ATTR_CMD)?,
                notify: fields
                    .optional(ATTR_NOTIF)
                    .map(|v| boolean(v, ATTR_NOTIF))
                    .transpose()?
                    .unwrap_or(DEFAULT_NOTIFY),
            })
        }
        ServiceKind::Snapshot => {
            let fields = Fields::new(data, &[ATTR_ENTITY_ID, ATTR_SNAP])?;
            CommandRequest::Snapshot(SnapshotRequest {
                entities: fields.required_entities()?,
                switch_input: fields
                    .optional(ATTR_SNAP)
                    .map(|v| boolean(v, ATTR_SNAP))
                    .transpose()?
                    .unwrap_or(DEFAULT_SWITCH_INPUT),
            })
        }
        ServiceKind::Restore => {
            let fields = Fields::new(data, &[ATTR_ENTITY_ID])?;
            CommandRequest::Restore(RestoreRequest {
                entities: fields.optional_entities()?,
            })
        }
        ServiceKind::GetTracks => {
            return Err(ServiceError::Unsupported(kind.as_str().to_string()));
        }
        ServiceKind::PlayTrack => {
            let fields = Fields::new(data, &[ATTR_ENTITY_ID, ATTR_TRACK])?;
            CommandRequest::PlayTrack(PlayTrackRequest {
                entity_id: entity_id(fields.required(ATTR_ENTITY_ID)?, ATTR_ENTITY_ID)?,
                track: track(fields.required(ATTR_TRACK)?)?,
            })
        }
        ServiceKind::SoundSettings => {
            let fields = Fields::new(
                data,
                &[
                    ATTR_ENTITY_ID,
                    ATTR_SOUND,
                    ATTR_SUB,
                    ATTR_SURROUND,
                    ATTR_VOICE,
                    ATTR_BASS,
                    ATTR_MUTE,
                    ATTR_POWER_SAVING,
                ],
            )?;
            let flag = |key: &'static str| -> ValidationResult<Option<bool>> {
                fields.optional(key).map(|v| boolean(v, key)).transpose()
            };
            CommandRequest::SoundSettings(SoundSettingsRequest {
                entity_id: entity_id(fields.required(ATTR_ENTITY_ID)?, ATTR_ENTITY_ID)?,
                settings: SoundSettings {
                    sound_program: fields
                        .optional(ATTR_SOUND)
                        .map(|v| string(v, ATTR_SOUND))
                        .transpose()?,
                    subwoofer_volume: fields
                        .optional(ATTR_SUB)
                        .map(|v| integer(v, ATTR_SUB))
                        .transpose()?,
                    surround: flag(ATTR_SURROUND)?,
                    clear_voice: flag(ATTR_VOICE)?,
                    bass_extension: flag(ATTR_BASS)?,
                    power_saving: flag(ATTR_POWER_SAVING)?,
                    mute: flag(ATTR_MUTE)?,
                },
            })
        }
    };
    Ok(request)
}

// ─────────────────────────────────────────────────────────────────────────────
// Field access
// ─────────────────────────────────────────────────────────────────────────────

/// Parameter bag restricted to a known key set.
struct Fields<'a> {
    map: Option<&'a Map<String, Value>>,
}

impl<'a> Fields<'a> {
    fn new(data: &'a Value, allowed: &[&str]) -> ValidationResult<Self> {
        let map = match data {
            Value::Null => None,
            Value::Object(map) => Some(map),
            _ => return Err(ValidationError::ExpectedObject),
        };
        if let Some(extra) = map
            .into_iter()
            .flat_map(|m| m.keys())
            .find(|key| !allowed.contains(&key.as_str()))
        {
            return Err(ValidationError::ExtraField(extra.clone()));
        }
        Ok(Self { map })
    }

    fn optional(&self, key: &str) -> Option<&'a Value> {
        self.map?.get(key).filter(|v| !v.is_null())
    }

    fn required(&self, key: &'static str) -> ValidationResult<&'a Value> {
        self.optional(key).ok_or(ValidationError::MissingField(key))
    }

    fn optional_entities(&self) -> ValidationResult<EntityFilter> {
        self.optional(ATTR_ENTITY_ID)
            .map(entity_ids)
            .transpose()
            .map(Option::unwrap_or_default)
    }

    fn required_entities(&self) -> ValidationResult<EntityFilter> {
        entity_ids(self.required(ATTR_ENTITY_ID)?)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Value validators
// ─────────────────────────────────────────────────────────────────────────────

/// Returns whether `id` has the `domain.object_id` form.
///
/// Both parts are non-empty lowercase `[a-z0-9_]`, neither starts nor ends
/// with `_`, and `__` appears nowhere.
pub fn is_valid_entity_id(id: &str) -> bool {
    fn valid_part(part: &str) -> bool {
        !part.is_empty()
            && !part.starts_with('_')
            && !part.ends_with('_')
            && part
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    }

    match id.split_once('.') {
        Some((domain, object_id)) => {
            !id.contains("__") && valid_part(domain) && valid_part(object_id)
        }
        None => false,
    }
}

/// Normalizes and validates a single entity id string.
pub fn normalize_entity_id(raw: &str) -> ValidationResult<String> {
    let id = raw.to_lowercase();
    if is_valid_entity_id(&id) {
        Ok(id)
    } else {
        Err(ValidationError::InvalidEntityId(raw.to_string()))
    }
}

fn entity_id(value: &Value, field: &'static str) -> ValidationResult<String> {
    match value {
        Value::String(s) => normalize_entity_id(s),
        Value::Array(_) => Err(ValidationError::ExpectedSingleEntity(field)),
        other => Err(ValidationError::InvalidEntityId(other.to_string())),
    }
}

/// Accepts `"all"`, a comma-separated string, or an array of ids.
fn entity_ids(value: &Value) -> ValidationResult<EntityFilter> {
    let ids = match value {
        Value::String(s) if s.to_lowercase() == ENTITY_MATCH_ALL => {
            return Ok(EntityFilter::All);
        }
        Value::String(s) => s
            .split(',')
            .map(|part| normalize_entity_id(part.trim()))
            .collect::<ValidationResult<Vec<_>>>()?,
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => normalize_entity_id(s),
                other => Err(ValidationError::InvalidEntityId(other.to_string())),
            })
            .collect::<ValidationResult<Vec<_>>>()?,
        other => return Err(ValidationError::InvalidEntityId(other.to_string())),
    };
    Ok(EntityFilter::Ids(ids))
}

fn boolean(value: &Value, field: &'static str) -> ValidationResult<bool> {
    let invalid = || ValidationError::InvalidBoolean {
        field,
        value: value.to_string(),
    };
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).ok_or_else(invalid),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" | "enable" => Ok(true),
            "0" | "false" | "no" | "off" | "disable" => Ok(false),
            _ => Err(invalid()),
        },
        _ => Err(invalid()),
    }
}

/// Integer coercion: numbers truncate, numeric strings parse.
fn coerce_int(value: &Value, field: &'static str) -> ValidationResult<i64> {
    let invalid = || ValidationError::InvalidInteger {
        field,
        value: value.to_string(),
    };
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .ok_or_else(invalid),
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

fn non_negative_int(value: &Value, field: &'static str) -> ValidationResult<u32> {
    let n = coerce_int(value, field)?;
    if n < 0 {
        return Err(ValidationError::NegativeInteger { field, value: n });
    }
    u32::try_from(n).map_err(|_| ValidationError::InvalidInteger {
        field,
        value: n.to_string(),
    })
}

/// Strict integer: only JSON integers are accepted.
fn integer(value: &Value, field: &'static str) -> ValidationResult<i64> {
    value.as_i64().ok_or_else(|| ValidationError::InvalidInteger {
        field,
        value: value.to_string(),
    })
}

fn string(value: &Value, field: &'static str) -> ValidationResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(ValidationError::ExpectedString(field)),
    }
}

fn track(value: &Value) -> ValidationResult<String> {
    string(value, ATTR_TRACK)
}
