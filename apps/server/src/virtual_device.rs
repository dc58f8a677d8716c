//! In-memory soundbar for running the server without hardware.
//!
//! Every action updates local state and logs what a real device would do.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use soundbar_core::{DeviceError, DeviceHandle, DeviceResult, SoundSettings, SoundbarDevice};

/// Playback state captured by `snapshot`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackSnapshot {
    pub track: Option<String>,
    pub preset: Option<u32>,
    pub switched_input: bool,
}

/// Group membership shared by every virtual soundbar of one server.
///
/// Maps each follower's entity id to the entity id of the device it follows.
#[derive(Debug, Default)]
pub struct VirtualGroups {
    leaders: Mutex<HashMap<String, String>>,
}

impl VirtualGroups {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Followers of `leader`, sorted by entity id.
    pub fn followers_of(&self, leader: &str) -> Vec<String> {
        let mut followers: Vec<String> = self
            .leaders
            .lock()
            .iter()
            .filter(|(_, l)| l.as_str() == leader)
            .map(|(f, _)| f.clone())
            .collect();
        followers.sort();
        followers
    }

    fn leads_any(&self, leader: &str) -> bool {
        self.leaders.lock().values().any(|l| l == leader)
    }

    /// Makes `followers` follow `leader`, leaving any previous group.
    ///
    /// A leader cannot itself follow another device.
    fn join(&self, leader: &str, followers: &[String]) {
        let mut leaders = self.leaders.lock();
        leaders.remove(leader);
        for follower in followers {
            leaders.insert(follower.clone(), leader.to_string());
        }
    }

    /// Releases every follower of `leader`, returning them.
    fn release_all(&self, leader: &str) -> Vec<String> {
        let released = self.followers_of(leader);
        self.leaders.lock().retain(|_, l| l != leader);
        released
    }

    /// Removes `follower` from its group, returning the former leader.
    fn leave(&self, follower: &str) -> Option<String> {
        self.leaders.lock().remove(follower)
    }
}

/// Observable state of a virtual soundbar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualState {
    pub preset: Option<u32>,
    pub last_command: Option<String>,
    pub track: Option<String>,
    pub snapshot: Option<PlaybackSnapshot>,
    pub sound: SoundSettings,
}

pub struct VirtualSoundbar {
    entity_id: String,
    name: String,
    groups: Arc<VirtualGroups>,
    state: Mutex<VirtualState>,
}

impl VirtualSoundbar {
    pub fn new(
        entity_id: impl Into<String>,
        name: impl Into<String>,
        groups: Arc<VirtualGroups>,
    ) -> Self {
        Self {
            entity_id: entity_id.into(),
            name: name.into(),
            groups,
            state: Mutex::new(VirtualState::default()),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> VirtualState {
        self.state.lock().clone()
    }
}

#[async_trait]
impl SoundbarDevice for VirtualSoundbar {
    fn entity_id(&self) -> &str {
        &self.entity_id
    }

    fn is_group_leader(&self) -> bool {
        self.groups.leads_any(&self.entity_id)
    }

    async fn join(&self, clients: &[DeviceHandle]) -> DeviceResult<()> {
        let ids: Vec<String> = clients
            .iter()
            .map(|c| c.entity_id().to_string())
            .filter(|id| *id != self.entity_id)
            .collect();
        log::info!("[Virtual] {} now leads {:?}", self.name, ids);
        self.groups.join(&self.entity_id, &ids);
        Ok(())
    }

    async fn unjoin_all(&self) -> DeviceResult<()> {
        let released = self.groups.release_all(&self.entity_id);
        log::info!("[Virtual] {} released {:?}", self.name, released);
        Ok(())
    }

    async fn unjoin_self(&self) -> DeviceResult<()> {
        match self.groups.leave(&self.entity_id) {
            Some(leader) => log::info!("[Virtual] {} left the group of {}", self.name, leader),
            None => log::debug!("[Virtual] {} was not in a group", self.name),
        }
        Ok(())
    }

    async fn preset(&self, preset: u32) -> DeviceResult<()> {
        log::info!("[Virtual] {} recalls preset {}", self.name, preset);
        let mut state = self.state.lock();
        state.preset = Some(preset);
        state.track = None;
        Ok(())
    }

    async fn execute_command(&self, command: &str, notify: bool) -> DeviceResult<()> {
        if command.trim().is_empty() {
            return Err(DeviceError::Rejected("empty command".into()));
        }
        if notify {
            log::info!("[Virtual] {} executed {:?}", self.name, command);
        } else {
            log::debug!("[Virtual] {} executed {:?}", self.name, command);
        }
        self.state.lock().last_command = Some(command.to_string());
        Ok(())
    }

    async fn snapshot(&self, switch_input: bool) -> DeviceResult<()> {
        let mut state = self.state.lock();
        state.snapshot = Some(PlaybackSnapshot {
            track: state.track.clone(),
            preset: state.preset,
            switched_input: switch_input,
        });
        log::info!(
            "[Virtual] {} captured snapshot (switchinput={})",
            self.name,
            switch_input
        );
        Ok(())
    }

    async fn restore(&self) -> DeviceResult<()> {
        let mut state = self.state.lock();
        let Some(snapshot) = state.snapshot.take() else {
            return Err(DeviceError::Rejected(format!(
                "{} has no snapshot to restore",
                self.entity_id
            )));
        };
        state.track = snapshot.track;
        state.preset = snapshot.preset;
        log::info!(
            "[Virtual] {} restored snapshot (input switched: {})",
            self.name,
            snapshot.switched_input
        );
        Ok(())
    }

    async fn play_track(&self, track: &str) -> DeviceResult<()> {
        log::info!("[Virtual] {} plays {:?}", self.name, track);
        self.state.lock().track = Some(track.to_string());
        Ok(())
    }

    async fn set_sound(&self, settings: &SoundSettings) -> DeviceResult<()> {
        log::info!("[Virtual] {} sound settings {:?}", self.name, settings);
        settings.apply_to(&mut self.state.lock().sound);
        Ok(())
    }
}
