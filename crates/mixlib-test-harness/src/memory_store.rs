//! In-memory device store for observing state projection in tests.

use std::collections::HashMap;
use std::sync::Mutex;

use mixlib_core::error::{Error, Result};
use mixlib_core::store::{DeviceRef, DeviceStore, DiscreteStatus};

#[derive(Debug, Default, Clone)]
struct DeviceRecord {
    string_value: Option<String>,
    status: Option<DiscreteStatus>,
}

#[derive(Debug, Default)]
struct Inner {
    devices: HashMap<String, (DeviceRef, DeviceRecord)>,
    next_ref: u32,
}

/// An in-memory [`DeviceStore`].
///
/// Mirrors the host-store contract: provisioning is idempotent, string
/// writes upsert by name, and status writes require an existing device
/// reference. Test accessors expose the projected state.
#[derive(Debug, Default)]
pub struct MemoryDeviceStore {
    inner: Mutex<Inner>,
}

impl MemoryDeviceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The string value projected onto a device, if any.
    pub fn string_value(&self, name: &str) -> Option<String> {
        let inner = self.inner.lock().unwrap();
        inner
            .devices
            .get(name)
            .and_then(|(_, record)| record.string_value.clone())
    }

    /// The discrete status projected onto a device, if any.
    pub fn status(&self, name: &str) -> Option<DiscreteStatus> {
        let inner = self.inner.lock().unwrap();
        inner
            .devices
            .get(name)
            .and_then(|(_, record)| record.status)
    }

    /// All devices that have had a discrete status written, with their
    /// current status.
    pub fn all_statuses(&self) -> Vec<(String, DiscreteStatus)> {
        let inner = self.inner.lock().unwrap();
        inner
            .devices
            .iter()
            .filter_map(|(name, (_, record))| record.status.map(|s| (name.clone(), s)))
            .collect()
    }

    /// Number of provisioned devices.
    pub fn device_count(&self) -> usize {
        self.inner.lock().unwrap().devices.len()
    }
}

impl DeviceStore for MemoryDeviceStore {
    fn ensure_device(&self, name: &str) -> Result<DeviceRef> {
        let mut inner = self.inner.lock().unwrap();
        if let Some((device, _)) = inner.devices.get(name) {
            return Ok(*device);
        }
        let device = DeviceRef(inner.next_ref);
        inner.next_ref += 1;
        inner
            .devices
            .insert(name.to_string(), (device, DeviceRecord::default()));
        Ok(device)
    }

    fn device_ref(&self, name: &str) -> Option<DeviceRef> {
        let inner = self.inner.lock().unwrap();
        inner.devices.get(name).map(|(device, _)| *device)
    }

    fn exists(&self, name: &str) -> bool {
        self.inner.lock().unwrap().devices.contains_key(name)
    }

    fn set_string_value(&self, name: &str, value: &str) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        if let Some((_, record)) = inner.devices.get_mut(name) {
            record.string_value = Some(value.to_string());
            return Ok(());
        }
        // By-name writes upsert, like the host store they stand in for.
        let device = DeviceRef(inner.next_ref);
        inner.next_ref += 1;
        inner.devices.insert(
            name.to_string(),
            (
                device,
                DeviceRecord {
                    string_value: Some(value.to_string()),
                    status: None,
                },
            ),
        );
        Ok(())
    }

    fn set_discrete_status(&self, device: DeviceRef, status: DiscreteStatus) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        for (reference, record) in inner.devices.values_mut() {
            if *reference == device {
                record.status = Some(status);
                return Ok(());
            }
        }
        Err(Error::Protocol(format!(
            "unknown device reference {device:?}"
        )))
    }
}
