//! Soundbar device abstraction.
//!
//! # Module Structure
//!
//! - `traits` - The [`SoundbarDevice`] capability trait and device errors
//! - `sound` - Sound settings payload for `set_sound`

mod sound;
mod traits;

#[cfg(test)]
pub(crate) mod test_support;

pub use sound::SoundSettings;
pub use traits::{DeviceAction, DeviceError, DeviceHandle, DeviceResult, SoundbarDevice};
