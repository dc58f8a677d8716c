//! Server configuration.
//!
//! Supports loading from YAML files with environment variable overrides.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use soundbar_core::normalize_entity_id;

/// A soundbar exposed by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceConfig {
    /// Entity id, e.g. `media_player.living_room`. Normalized to lowercase.
    pub entity_id: String,

    /// Friendly name used in logs. Defaults to the entity id.
    #[serde(default)]
    pub name: Option<String>,
}

impl DeviceConfig {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.entity_id)
    }
}

/// Server configuration loaded from YAML with environment overrides.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port to bind the HTTP server to.
    /// Override: `SOUNDBAR_BIND_PORT`
    pub bind_port: u16,

    /// Devices registered at startup, in registry order.
    pub devices: Vec<DeviceConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_port: 49500,
            devices: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from a YAML file, then applies environment overrides.
    ///
    /// Device entity ids are normalized and must be valid and unique.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = path {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.validate_devices()?;
        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SOUNDBAR_BIND_PORT") {
            if let Ok(port) = val.parse() {
                self.bind_port = port;
            }
        }
    }

    fn validate_devices(&mut self) -> Result<()> {
        let mut seen = HashSet::new();
        for device in &mut self.devices {
            device.entity_id = normalize_entity_id(&device.entity_id)
                .with_context(|| format!("Invalid device entry: {}", device.display_name()))?;
            if !seen.insert(device.entity_id.clone()) {
                bail!("Duplicate device entity id: {}", device.entity_id);
            }
        }
        Ok(())
    }
}
