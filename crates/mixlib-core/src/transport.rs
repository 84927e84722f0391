//! Transport trait for mixer communication.
//!
//! The [`Transport`] trait abstracts over the physical link to an automatic
//! mixer unit. The production implementation is a serial port
//! (`mixlib-transport`); tests use the deterministic mock from
//! `mixlib-test-harness`.
//!
//! The protocol engine operates on a `Transport` rather than directly on a
//! serial port, so the same codec and dispatch code runs against real
//! hardware and against replayed byte streams.

use async_trait::async_trait;
use std::time::Duration;

use crate::error::Result;

/// Asynchronous byte-level transport to a mixer unit.
///
/// Implementations handle buffering and error recovery at the physical
/// layer. Framing (carriage-return delimiting) and protocol concerns
/// (unit addressing, command structure) live above this trait.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send raw bytes to the mixer.
    ///
    /// Implementations should not return until all bytes have been written
    /// to the underlying link.
    async fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Receive bytes from the mixer into the provided buffer.
    ///
    /// Returns the number of bytes actually read. Waits up to `timeout`
    /// for data to arrive; returns [`Error::Timeout`](crate::error::Error::Timeout)
    /// if nothing is received within the deadline.
    async fn receive(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize>;

    /// Close the transport connection.
    ///
    /// After calling `close()`, subsequent `send()` and `receive()` calls
    /// should return [`Error::NotConnected`](crate::error::Error::NotConnected).
    async fn close(&mut self) -> Result<()>;

    /// Check whether the transport is currently connected.
    fn is_connected(&self) -> bool;
}
