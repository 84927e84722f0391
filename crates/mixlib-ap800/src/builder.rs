//! Ap800Builder -- fluent builder for constructing [`Ap800Mixer`] drivers.
//!
//! Separates configuration from construction so that callers can set up
//! the serial port, device store, and provisioning before the link is
//! opened. Configuration can come from an explicit [`Settings`] value
//! (loaded by the caller, re-loaded before reconnecting) or from
//! individual builder calls.
//!
//! # Example
//!
//! ```no_run
//! use mixlib_ap800::builder::Ap800Builder;
//! use mixlib_ap800::config::Settings;
//! use mixlib_core::UnitCode;
//! # use std::sync::Arc;
//! # use mixlib_core::{DeviceStore, DeviceRef, DiscreteStatus, Result};
//! # struct HostStore;
//! # impl DeviceStore for HostStore {
//! #     fn ensure_device(&self, _: &str) -> Result<DeviceRef> { Ok(DeviceRef(0)) }
//! #     fn device_ref(&self, _: &str) -> Option<DeviceRef> { None }
//! #     fn exists(&self, _: &str) -> bool { false }
//! #     fn set_string_value(&self, _: &str, _: &str) -> Result<()> { Ok(()) }
//! #     fn set_discrete_status(&self, _: DeviceRef, _: DiscreteStatus) -> Result<()> { Ok(()) }
//! # }
//!
//! # async fn example() -> mixlib_core::Result<()> {
//! let settings = Settings::load("ap800.toml")?;
//! let mixer = Ap800Builder::from_settings(&settings)
//!     .device_store(Arc::new(HostStore))
//!     .provision_unit(UnitCode::new(0))
//!     .build()
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tracing::info;

use mixlib_core::error::{Error, Result};
use mixlib_core::store::DeviceStore;
use mixlib_core::transport::Transport;
use mixlib_core::types::UnitCode;
use mixlib_transport::SerialTransport;

use crate::config::Settings;
use crate::mixer::Ap800Mixer;
use crate::types::BaudRate;

/// Fluent builder for [`Ap800Mixer`].
pub struct Ap800Builder {
    serial_port: Option<String>,
    baud_rate: BaudRate,
    store: Option<Arc<dyn DeviceStore>>,
    provision_units: Vec<UnitCode>,
    probe_unit: UnitCode,
}

impl Ap800Builder {
    /// Create a builder with defaults: 9600 baud, probe unit 0, no
    /// provisioning.
    pub fn new() -> Self {
        Ap800Builder {
            serial_port: None,
            baud_rate: BaudRate::Baud9600,
            store: None,
            provision_units: Vec::new(),
            probe_unit: UnitCode::new(0),
        }
    }

    /// Create a builder seeded from a [`Settings`] value.
    ///
    /// An unsupported `baud_rate` in the settings has already been mapped
    /// to 9600 by [`Settings::baud`].
    pub fn from_settings(settings: &Settings) -> Self {
        Ap800Builder::new()
            .serial_port(&settings.serial_port)
            .baud_rate(settings.baud())
    }

    /// Set the serial port path (e.g. `/dev/ttyUSB0` or `COM3`).
    pub fn serial_port(mut self, port: &str) -> Self {
        self.serial_port = Some(port.to_string());
        self
    }

    /// Set the baud rate (default: 9600).
    pub fn baud_rate(mut self, baud: BaudRate) -> Self {
        self.baud_rate = baud;
        self
    }

    /// Set the device store replies are projected onto. Required.
    pub fn device_store(mut self, store: Arc<dyn DeviceStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Provision the projection devices for a unit at connect time.
    /// May be called once per unit on the chain.
    pub fn provision_unit(mut self, unit: UnitCode) -> Self {
        self.provision_units.push(unit);
        self
    }

    /// Set the unit whose unique ID is requested as the connect-time
    /// connectivity probe (default: unit 0).
    pub fn probe_unit(mut self, unit: UnitCode) -> Self {
        self.probe_unit = unit;
        self
    }

    /// Build an [`Ap800Mixer`] with a caller-provided transport.
    ///
    /// This is the entry point for testing (pass a `MockTransport` from
    /// `mixlib-test-harness`) and for hosts that manage the link
    /// themselves.
    pub async fn build_with_transport(self, transport: Box<dyn Transport>) -> Result<Ap800Mixer> {
        let store = self
            .store
            .ok_or_else(|| Error::Config("device store is required".into()))?;

        let mixer = Ap800Mixer::new(transport, store);

        for unit in &self.provision_units {
            mixer.provision_unit(*unit)?;
        }

        mixer.announce_connected();
        info!("AP800 connected");

        // Ensure connectivity by requesting the UID of the probe unit.
        // Fire-and-forget: the reply, if any, surfaces through the log.
        mixer.request_unique_id(self.probe_unit).await?;

        Ok(mixer)
    }

    /// Build an [`Ap800Mixer`] over a serial transport.
    ///
    /// Requires [`serial_port()`](Self::serial_port). Framing is fixed at
    /// 8 data bits, 1 stop bit, no parity. An open failure is reported
    /// once and returned; there is no automatic retry.
    pub async fn build(self) -> Result<Ap800Mixer> {
        let port = self
            .serial_port
            .as_ref()
            .ok_or_else(|| Error::Config("serial_port is required for build()".into()))?;

        info!("Connecting to AP800 at {} baud...", self.baud_rate.bps());
        let transport = SerialTransport::open(port, self.baud_rate.bps()).await?;
        self.build_with_transport(Box::new(transport)).await
    }
}

impl Default for Ap800Builder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mixlib_test_harness::{MemoryDeviceStore, MockTransport};

    #[tokio::test]
    async fn builder_requires_device_store() {
        let mock = MockTransport::new();
        let result = Ap800Builder::new()
            .build_with_transport(Box::new(mock))
            .await;
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn builder_requires_serial_port_for_build() {
        let result = Ap800Builder::new()
            .device_store(Arc::new(MemoryDeviceStore::new()))
            .build()
            .await;
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn builder_provisions_configured_units() {
        let store = Arc::new(MemoryDeviceStore::new());
        let mock = MockTransport::new();

        let _mixer = Ap800Builder::new()
            .device_store(store.clone())
            .provision_unit(UnitCode::new(0))
            .build_with_transport(Box::new(mock))
            .await
            .unwrap();

        // Max-mics device plus eight mute-status devices.
        assert_eq!(store.device_count(), 9);
    }

    #[tokio::test]
    async fn builder_probes_configured_unit() {
        let store = Arc::new(MemoryDeviceStore::new());
        let mock = MockTransport::new();
        let sent = mock.sent_frames();

        let _mixer = Ap800Builder::new()
            .device_store(store)
            .probe_unit(UnitCode::new(3))
            .build_with_transport(Box::new(mock))
            .await
            .unwrap();

        for _ in 0..200 {
            if sent.contains(b"#13 UID\r") {
                return;
            }
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
        panic!("probe frame not sent");
    }

    #[tokio::test]
    async fn builder_from_settings_uses_baud_fallback() {
        let settings = Settings::parse(
            r#"
            serial_port = "/dev/ttyUSB0"
            baud_rate = 12345
            "#,
        )
        .unwrap();

        let builder = Ap800Builder::from_settings(&settings);
        assert_eq!(builder.baud_rate, BaudRate::Baud9600);
        assert_eq!(builder.serial_port.as_deref(), Some("/dev/ttyUSB0"));
    }
}
