//! Sound settings carried by the `sound_settings` service.

use serde::{Deserialize, Serialize};

/// Sound adjustments for a single device.
///
/// All seven keys are always present when serialized; a `None` field means
/// "leave unchanged", never a default value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundSettings {
    pub sound_program: Option<String>,
    pub subwoofer_volume: Option<i64>,
    pub surround: Option<bool>,
    pub clear_voice: Option<bool>,
    pub bass_extension: Option<bool>,
    pub power_saving: Option<bool>,
    pub mute: Option<bool>,
}

impl SoundSettings {
    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        self.sound_program.is_none()
            && self.subwoofer_volume.is_none()
            && self.surround.is_none()
            && self.clear_voice.is_none()
            && self.bass_extension.is_none()
            && self.power_saving.is_none()
            && self.mute.is_none()
    }

    /// Copies every set field of `self` onto `target`, keeping the rest.
    pub fn apply_to(&self, target: &mut SoundSettings) {
        if let Some(ref program) = self.sound_program {
            target.sound_program = Some(program.clone());
        }
        if self.subwoofer_volume.is_some() {
            target.subwoofer_volume = self.subwoofer_volume;
        }
        if self.surround.is_some() {
            target.surround = self.surround;
        }
        if self.clear_voice.is_some() {
            target.clear_voice = self.clear_voice;
        }
        if self.bass_extension.is_some() {
            target.bass_extension = self.bass_extension;
        }
        if self.power_saving.is_some() {
            target.power_saving = self.power_saving;
        }
        if self.mute.is_some() {
            target.mute = self.mute;
        }
    }
}
