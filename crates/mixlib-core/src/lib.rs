//! mixlib-core: Core traits, types, and error definitions for mixlib.
//!
//! This crate defines the device-family-agnostic abstractions the rest of
//! the workspace builds on. Host applications depend on these types without
//! pulling in any specific protocol driver.
//!
//! # Key types
//!
//! - [`Transport`] -- byte-level communication channel
//! - [`DeviceStore`] -- host-owned store the engine projects state onto
//! - [`MixerEvent`] -- asynchronous state change notifications
//! - [`UnitCode`] -- address of one unit on the shared serial line
//! - [`Error`] / [`Result`] -- error handling

pub mod error;
pub mod events;
pub mod store;
pub mod transport;
pub mod types;

// Re-export key types at crate root for ergonomic `use mixlib_core::*`.
pub use error::{Error, Result};
pub use events::MixerEvent;
pub use store::{DeviceRef, DeviceStore, DiscreteStatus};
pub use transport::Transport;
pub use types::UnitCode;
