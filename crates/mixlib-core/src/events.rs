//! Asynchronous mixer event types.
//!
//! Events are emitted by the driver through a [`tokio::sync::broadcast`]
//! channel as inbound replies are decoded and projected. Host applications
//! subscribe for real-time updates without polling the device store.

use crate::types::UnitCode;

/// An event emitted by a mixer driver when device state changes.
///
/// Events are delivered on a best-effort basis through a bounded broadcast
/// channel; slow consumers may miss events under heavy reply traffic.
#[derive(Debug, Clone)]
pub enum MixerEvent {
    /// A microphone input's mute state changed.
    MuteChanged {
        /// The unit that reported the change.
        unit: UnitCode,
        /// Microphone channel number (1-8).
        channel: u8,
        /// `true` if the channel is now muted.
        muted: bool,
    },

    /// The maximum-active-microphones limit changed.
    MaxMicsChanged {
        /// The unit that reported the change.
        unit: UnitCode,
        /// The reported limit, verbatim as received (`"0"`-`"8"`).
        count: String,
    },

    /// The unit reported a protocol error.
    DeviceError {
        /// The unit that reported the error.
        unit: UnitCode,
        /// The numeric error code (1-6).
        code: u8,
        /// Human-readable description of the error code.
        description: &'static str,
    },

    /// Successfully connected to the mixer link.
    Connected,

    /// The mixer link was closed.
    Disconnected,
}
