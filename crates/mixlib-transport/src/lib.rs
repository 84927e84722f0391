//! mixlib-transport: Serial transport implementation for mixlib.
//!
//! Provides [`SerialTransport`], the production [`Transport`](mixlib_core::Transport)
//! over RS-232 / USB virtual COM ports with the fixed 8N1 framing the mixer
//! hardware requires.

pub mod serial;

pub use serial::{SerialConfig, SerialTransport};
