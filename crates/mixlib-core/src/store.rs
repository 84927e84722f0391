//! Device-store boundary.
//!
//! The protocol engine projects selected reply fields onto devices owned by
//! the host system (a home-automation store, a control-surface model, ...).
//! [`DeviceStore`] is the seam: the engine only ever performs
//! lookup-or-create, write-string-by-name, and write-status-by-reference
//! operations, and never assumes anything about how devices are persisted.
//!
//! Concurrent external writers to the same device key are outside this
//! crate's consistency responsibility; the engine treats the store as
//! append/overwrite-only per key.

use crate::error::Result;

/// Opaque reference to a device held by the host store.
///
/// Obtained from [`DeviceStore::ensure_device`] or
/// [`DeviceStore::device_ref`] and passed back for status writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceRef(pub u32);

/// Discrete device status in the host's status vocabulary.
///
/// The host store models on/off as fixed numeric status codes (2 and 3),
/// independent of the wire protocol's `1`/`0` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscreteStatus {
    /// Device is on / active (host status code 2).
    On,
    /// Device is off / inactive (host status code 3).
    Off,
}

impl DiscreteStatus {
    /// The numeric status code used by the host store.
    pub fn code(&self) -> u8 {
        match self {
            DiscreteStatus::On => 2,
            DiscreteStatus::Off => 3,
        }
    }
}

/// Host-owned store of named devices.
///
/// All operations are idempotent from the engine's perspective:
/// provisioning a device that already exists is a no-op, and value writes
/// overwrite whatever was there before.
pub trait DeviceStore: Send + Sync {
    /// Look up a device by friendly name, creating it if missing.
    ///
    /// Returns the reference of the existing or newly created device.
    fn ensure_device(&self, name: &str) -> Result<DeviceRef>;

    /// Look up an existing device by friendly name.
    fn device_ref(&self, name: &str) -> Option<DeviceRef>;

    /// Returns `true` if a device with the given name already exists.
    fn exists(&self, name: &str) -> bool;

    /// Overwrite the string value of the named device.
    fn set_string_value(&self, name: &str, value: &str) -> Result<()>;

    /// Overwrite the discrete status of the referenced device.
    fn set_discrete_status(&self, device: DeviceRef, status: DiscreteStatus) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_host_vocabulary() {
        assert_eq!(DiscreteStatus::On.code(), 2);
        assert_eq!(DiscreteStatus::Off.code(), 3);
    }

    #[test]
    fn device_ref_is_copy_and_comparable() {
        let a = DeviceRef(7);
        let b = a;
        assert_eq!(a, b);
        assert_ne!(a, DeviceRef(8));
    }
}
