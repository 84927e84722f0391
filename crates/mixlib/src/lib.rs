//! # mixlib -- AP800 Automatic Mixer Control
//!
//! `mixlib` is an asynchronous Rust library for driving Gentner/ClearOne
//! AP800 automatic microphone mixers over an RS-232 serial link. It is
//! designed for room-automation hosts that expose mixer state as named
//! devices and need reliable, noise-tolerant handling of the AP800's
//! textual command/reply protocol.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mixlib::{Ap800Builder, Channel, ChannelType, Settings, UnitCode};
//! # use std::sync::Arc;
//! # use mixlib::{DeviceStore, DeviceRef, DiscreteStatus, Result};
//! # struct HostStore;
//! # impl DeviceStore for HostStore {
//! #     fn ensure_device(&self, _: &str) -> Result<DeviceRef> { Ok(DeviceRef(0)) }
//! #     fn device_ref(&self, _: &str) -> Option<DeviceRef> { None }
//! #     fn exists(&self, _: &str) -> bool { false }
//! #     fn set_string_value(&self, _: &str, _: &str) -> Result<()> { Ok(()) }
//! #     fn set_discrete_status(&self, _: DeviceRef, _: DiscreteStatus) -> Result<()> { Ok(()) }
//! # }
//!
//! #[tokio::main]
//! async fn main() -> mixlib::Result<()> {
//!     let settings = Settings::load("ap800.toml")?;
//!     let mixer = Ap800Builder::from_settings(&settings)
//!         .device_store(Arc::new(HostStore))
//!         .provision_unit(UnitCode::new(0))
//!         .build()
//!         .await?;
//!
//!     // Mute microphone 3 on unit 0; the confirming reply is projected
//!     // onto the host device store when it arrives.
//!     mixer
//!         .set_mute(UnitCode::new(0), Channel::Number(3), ChannelType::Input, true)
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized as a workspace of focused crates:
//!
//! | Crate                 | Purpose                                         |
//! |-----------------------|-------------------------------------------------|
//! | `mixlib-core`         | Traits ([`Transport`], [`DeviceStore`]), types, errors |
//! | `mixlib-transport`    | Serial transport (fixed 8N1 framing)            |
//! | `mixlib-ap800`        | AP800 codec, command builders, dispatch, driver |
//! | `mixlib-test-harness` | Mock transport and in-memory device store       |
//! | **`mixlib`**          | This facade crate -- re-exports everything      |
//!
//! ## Protocol model
//!
//! The AP800 wire protocol has no acknowledgement, correlation, or retry
//! mechanism. `mixlib` matches it: outbound commands are fire-and-forget,
//! and every inbound frame is decoded and dispatched independently, in
//! arrival order. Out-of-range control values are silently clamped to the
//! device's documented ranges rather than rejected, and unknown or
//! foreign-family frames degrade to a log line.
//!
//! ## Events
//!
//! The driver emits [`MixerEvent`]s through a broadcast channel as replies
//! are projected. Subscribe via
//! [`Ap800Mixer::subscribe`](mixlib_ap800::Ap800Mixer::subscribe) to
//! observe mute changes, max-mics changes, and device-reported errors
//! without polling the device store.

pub use mixlib_core::{
    DeviceRef, DeviceStore, DiscreteStatus, Error, MixerEvent, Result, Transport, UnitCode,
};

pub use mixlib_transport::{SerialConfig, SerialTransport};

pub use mixlib_ap800::config::{LogLevel, Settings};
pub use mixlib_ap800::types::{
    BaudRate, Channel, ChannelType, DecayRate, EcReference, EqBand, GatingMode, LastMicMode,
    MasterMode, MeterSource, MicInputGain, NlpMode,
};
pub use mixlib_ap800::{Ap800Builder, Ap800Mixer};

/// The AP800 protocol engine: codec, policy, builders, dispatch.
pub mod ap800 {
    pub use mixlib_ap800::commands;
    pub use mixlib_ap800::dispatch;
    pub use mixlib_ap800::naming;
    pub use mixlib_ap800::policy;
    pub use mixlib_ap800::protocol;
}
