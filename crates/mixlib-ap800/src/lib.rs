//! Gentner/ClearOne AP800 protocol backend for mixlib.
//!
//! This crate implements the AP800 automatic microphone mixer's
//! carriage-return-terminated ASCII protocol. It provides:
//!
//! - **Protocol codec** ([`protocol`]) -- encode and decode
//!   sentinel-anchored command/reply frames, with unit addressing, reply
//!   classification, and the device error-code table.
//! - **Value policy** ([`policy`]) -- clamp-to-boundary ranges for the
//!   bounded numeric controls.
//! - **Command builders** ([`commands`]) -- one pure, typed function per
//!   protocol operation across the full mnemonic set, with set, toggle,
//!   and request shapes where the device supports them.
//! - **Reply dispatch** ([`dispatch`]) -- routes decoded replies through a
//!   closed sum of handled kinds and projects mute and max-mics state
//!   onto a host [`DeviceStore`](mixlib_core::DeviceStore).
//! - **Driver** ([`mixer`]) -- background reader task, carriage-return
//!   frame delimiting, fire-and-forget sends, device provisioning, and
//!   [`MixerEvent`](mixlib_core::MixerEvent) emission.
//! - **Builder** ([`builder`]) -- fluent construction from explicit
//!   [`Settings`](config::Settings) or individual options.
//!
//! The wire protocol has no acknowledgement or correlation mechanism:
//! commands are fire-and-forget and every reply is handled as an
//! independent, unsolicited frame. There is consequently no
//! request/response matching, no retry, and no reply timeout anywhere in
//! this crate.
//!
//! # Example
//!
//! ```
//! use mixlib_ap800::commands::cmd_set_hold_time;
//! use mixlib_ap800::protocol::{DecodeOutcome, decode_reply};
//! use mixlib_core::UnitCode;
//!
//! // Build a "set hold time" command; out-of-range values are clamped.
//! let cmd = cmd_set_hold_time(UnitCode::new(0), 50);
//! assert_eq!(cmd, b"#10 HOLD 100\r");
//!
//! // Decode a reply frame, tolerating leading line noise.
//! match decode_reply(b"noise#12 MUTE 3 I 1") {
//!     DecodeOutcome::Reply(reply) => {
//!         assert_eq!(reply.unit.code(), 2);
//!         assert_eq!(reply.mnemonic, "MUTE");
//!     }
//!     other => panic!("expected Reply, got {other:?}"),
//! }
//! ```

pub mod builder;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod mixer;
pub mod naming;
pub mod policy;
pub mod protocol;
pub mod types;

// Re-export the primary types for ergonomic `use mixlib_ap800::*`.
pub use builder::Ap800Builder;
pub use config::Settings;
pub use mixer::Ap800Mixer;
