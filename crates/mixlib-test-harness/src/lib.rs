//! mixlib-test-harness: Test utilities and mock collaborators for mixlib.
//!
//! This crate provides [`MockTransport`] for deterministic testing of the
//! protocol engine without mixer hardware, and [`MemoryDeviceStore`] for
//! observing state projection without a host automation system.

pub mod memory_store;
pub mod mock_serial;

pub use memory_store::MemoryDeviceStore;
pub use mock_serial::{MockTransport, ReplyInjector, SentFrames};
