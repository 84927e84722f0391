//! Mock transport for deterministic testing of the protocol engine.
//!
//! [`MockTransport`] implements the [`Transport`] trait with a recorded
//! sent-frame log and an injectable inbound byte queue. The AP800 wire
//! protocol has no request/response correlation -- outbound commands are
//! fire-and-forget and every reply is effectively unsolicited -- so unlike
//! a lock-step expectation mock, this transport lets a test observe what
//! was sent and feed in reply bytes at any time.
//!
//! Because the driver moves its transport into a background reader task,
//! both observation handles are clonable and remain usable after the
//! transport itself has been consumed:
//!
//! ```
//! use mixlib_test_harness::MockTransport;
//!
//! let mock = MockTransport::new();
//! let sent = mock.sent_frames();
//! let injector = mock.injector();
//! // ... move `mock` into a driver, then:
//! injector.inject(b"#10 MMAX 4\r");
//! assert!(sent.frames().is_empty());
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

use mixlib_core::error::{Error, Result};
use mixlib_core::transport::Transport;

/// Clonable handle onto the frames a [`MockTransport`] has sent.
#[derive(Debug, Clone)]
pub struct SentFrames(Arc<Mutex<Vec<Vec<u8>>>>);

impl SentFrames {
    /// Snapshot of every `send()` payload so far, in order.
    pub fn frames(&self) -> Vec<Vec<u8>> {
        self.0.lock().unwrap().clone()
    }

    /// Returns `true` if the exact frame has been sent.
    pub fn contains(&self, frame: &[u8]) -> bool {
        self.0.lock().unwrap().iter().any(|f| f == frame)
    }

    /// Number of frames sent so far.
    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    /// Returns `true` if nothing has been sent.
    pub fn is_empty(&self) -> bool {
        self.0.lock().unwrap().is_empty()
    }
}

/// Clonable handle for injecting inbound bytes into a [`MockTransport`].
#[derive(Debug, Clone)]
pub struct ReplyInjector(mpsc::UnboundedSender<Vec<u8>>);

impl ReplyInjector {
    /// Queue bytes to be returned by the transport's next `receive()`
    /// call(s). Chunk boundaries are preserved, so a test can split one
    /// frame across injections or concatenate several frames into one
    /// chunk.
    pub fn inject(&self, bytes: &[u8]) {
        // Send fails only when the transport is gone; tests don't care.
        let _ = self.0.send(bytes.to_vec());
    }
}

/// A mock [`Transport`] for testing the engine without hardware.
pub struct MockTransport {
    sent: Arc<Mutex<Vec<Vec<u8>>>>,
    inbound_tx: mpsc::UnboundedSender<Vec<u8>>,
    inbound_rx: mpsc::UnboundedReceiver<Vec<u8>>,
    /// Bytes from a previous chunk not yet drained by `receive()`.
    pending: Vec<u8>,
    connected: bool,
}

impl MockTransport {
    /// Create a new mock transport in the connected state.
    pub fn new() -> Self {
        let (inbound_tx, inbound_rx) = mpsc::unbounded_channel();
        MockTransport {
            sent: Arc::new(Mutex::new(Vec::new())),
            inbound_tx,
            inbound_rx,
            pending: Vec::new(),
            connected: true,
        }
    }

    /// Handle onto the sent-frame log; stays valid after the transport is
    /// moved into a driver.
    pub fn sent_frames(&self) -> SentFrames {
        SentFrames(self.sent.clone())
    }

    /// Handle for injecting inbound bytes; stays valid after the transport
    /// is moved into a driver.
    pub fn injector(&self) -> ReplyInjector {
        ReplyInjector(self.inbound_tx.clone())
    }

    /// Queue inbound bytes directly (see [`ReplyInjector::inject`]).
    pub fn push_reply(&self, bytes: &[u8]) {
        let _ = self.inbound_tx.send(bytes.to_vec());
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&mut self, data: &[u8]) -> Result<()> {
        if !self.connected {
            return Err(Error::NotConnected);
        }
        self.sent.lock().unwrap().push(data.to_vec());
        Ok(())
    }

    async fn receive(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize> {
        if !self.connected {
            return Err(Error::NotConnected);
        }

        if self.pending.is_empty() {
            match tokio::time::timeout(timeout, self.inbound_rx.recv()).await {
                Ok(Some(chunk)) => self.pending = chunk,
                // Injectors dropped: behave like a silent line.
                Ok(None) => return Err(Error::Timeout),
                Err(_) => return Err(Error::Timeout),
            }
        }

        let n = self.pending.len().min(buf.len());
        buf[..n].copy_from_slice(&self.pending[..n]);
        self.pending.drain(..n);
        Ok(n)
    }

    async fn close(&mut self) -> Result<()> {
        self.connected = false;
        self.pending.clear();
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}
