//! Live registry of known soundbar devices.
//!
//! The device layer adds and removes entries; the dispatcher only reads.
//! Reads go through a [`RegistrySnapshot`] taken once per request so that
//! resolution is a pure function of the filter and that snapshot.

use parking_lot::RwLock;

use crate::device::DeviceHandle;

/// Selects the target devices of a service call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EntityFilter {
    /// Every registered device. Also used when no filter was given.
    #[default]
    All,
    /// Devices whose entity id appears in the list. An empty list resolves
    /// like `All` but names no entity.
    Ids(Vec<String>),
}

impl EntityFilter {
    /// Filter selecting exactly one entity id.
    pub fn single(entity_id: impl Into<String>) -> Self {
        Self::Ids(vec![entity_id.into()])
    }

    /// Returns whether `entity_id` passes this filter during resolution.
    pub fn matches(&self, entity_id: &str) -> bool {
        match self {
            Self::All => true,
            Self::Ids(ids) => ids.is_empty() || ids.iter().any(|id| id == entity_id),
        }
    }

    /// Returns whether `entity_id` is explicitly selected by this filter.
    ///
    /// Unlike [`matches`](Self::matches), an empty id list names nothing.
    pub fn names(&self, entity_id: &str) -> bool {
        match self {
            Self::All => true,
            Self::Ids(ids) => ids.iter().any(|id| id == entity_id),
        }
    }
}

/// Ordered collection of device handles keyed by entity id.
#[derive(Default)]
pub struct DeviceRegistry {
    devices: RwLock<Vec<DeviceHandle>>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a device at the end of the registry.
    ///
    /// A device with the same entity id is replaced in place, keeping its
    /// position; the replaced handle is returned.
    pub fn insert(&self, device: DeviceHandle) -> Option<DeviceHandle> {
        let mut devices = self.devices.write();
        if let Some(slot) = devices
            .iter_mut()
            .find(|d| d.entity_id() == device.entity_id())
        {
            log::debug!("[Registry] Replacing device {}", device.entity_id());
            return Some(std::mem::replace(slot, device));
        }
        log::debug!("[Registry] Adding device {}", device.entity_id());
        devices.push(device);
        None
    }

    /// Removes the device with the given entity id.
    pub fn remove(&self, entity_id: &str) -> Option<DeviceHandle> {
        let mut devices = self.devices.write();
        let index = devices.iter().position(|d| d.entity_id() == entity_id)?;
        log::debug!("[Registry] Removing device {}", entity_id);
        Some(devices.remove(index))
    }

    /// Looks up a device by entity id.
    pub fn get(&self, entity_id: &str) -> Option<DeviceHandle> {
        self.devices
            .read()
            .iter()
            .find(|d| d.entity_id() == entity_id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.devices.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.read().is_empty()
    }

    /// Entity ids in registry order.
    pub fn entity_ids(&self) -> Vec<String> {
        self.devices
            .read()
            .iter()
            .map(|d| d.entity_id().to_string())
            .collect()
    }

    /// Captures the current device set.
    ///
    /// Later inserts and removals do not affect the returned snapshot.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            devices: self.devices.read().clone(),
        }
    }

    /// Resolves `filter` against the current device set.
    pub fn resolve(&self, filter: &EntityFilter) -> Vec<DeviceHandle> {
        self.snapshot().resolve(filter)
    }
}

/// Point-in-time view of the registry.
#[derive(Clone)]
pub struct RegistrySnapshot {
    devices: Vec<DeviceHandle>,
}

impl RegistrySnapshot {
    /// Returns the devices matching `filter` in registry order.
    ///
    /// Unknown ids are dropped; input order and duplicates in the filter
    /// have no effect on the result.
    pub fn resolve(&self, filter: &EntityFilter) -> Vec<DeviceHandle> {
        self.devices
            .iter()
            .filter(|d| filter.matches(d.entity_id()))
            .cloned()
            .collect()
    }

    /// Finds a device by entity id in the full snapshot.
    pub fn find(&self, entity_id: &str) -> Option<&DeviceHandle> {
        self.devices.iter().find(|d| d.entity_id() == entity_id)
    }

    pub fn devices(&self) -> &[DeviceHandle] {
        &self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}
