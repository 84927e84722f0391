//! Ap800Mixer -- the connected-driver front end.
//!
//! This module ties the protocol engine ([`protocol`](crate::protocol),
//! [`commands`](crate::commands), [`dispatch`](crate::dispatch)) to a
//! [`Transport`] to produce a working AP800 driver.
//!
//! The AP800 never correlates replies to requests: a reply may answer a
//! query sent seconds ago, echo a front-panel change, or arrive for a
//! command some other controller issued. The driver therefore moves the
//! transport into a single background reader task at construction.
//! Outbound frames are forwarded to that task over an mpsc channel and
//! written fire-and-forget; inbound bytes are accumulated, split on the
//! carriage-return delimiter, and run through decode + dispatch one frame
//! at a time, in arrival order. There is no pending-request tracking, no
//! retry, and no reply timeout, because the wire protocol offers nothing
//! to anchor them to.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, info, trace, warn};

use mixlib_core::error::{Error, Result};
use mixlib_core::events::MixerEvent;
use mixlib_core::store::DeviceStore;
use mixlib_core::transport::Transport;
use mixlib_core::types::UnitCode;

use crate::commands;
use crate::dispatch::ReplyDispatcher;
use crate::naming;
use crate::protocol::{DecodeOutcome, TERMINATOR, decode_reply};
use crate::types::{Channel, ChannelType};

/// A request sent from the driver to the reader task.
enum ReaderCommand {
    /// A wire frame to transmit.
    Frame(Vec<u8>),
    /// Close the transport and exit the reader loop.
    Shutdown,
}

/// A connected AP800 mixer chain.
///
/// Constructed via [`Ap800Builder`](crate::builder::Ap800Builder). One
/// driver serves every unit on the link; each operation addresses a unit
/// explicitly.
pub struct Ap800Mixer {
    cmd_tx: mpsc::Sender<ReaderCommand>,
    event_tx: broadcast::Sender<MixerEvent>,
    store: Arc<dyn DeviceStore>,
    /// Kept so the reader task is tied to the driver's lifetime.
    #[allow(dead_code)]
    reader_handle: JoinHandle<()>,
}

impl Ap800Mixer {
    /// Create a driver over the given transport.
    ///
    /// Called by [`Ap800Builder`](crate::builder::Ap800Builder); use the
    /// builder API instead.
    pub(crate) fn new(transport: Box<dyn Transport>, store: Arc<dyn DeviceStore>) -> Self {
        let (event_tx, _) = broadcast::channel(256);
        let (cmd_tx, cmd_rx) = mpsc::channel(16);

        let dispatcher = ReplyDispatcher::new(store.clone(), event_tx.clone());
        let reader_handle = tokio::spawn(reader_loop(
            transport,
            dispatcher,
            event_tx.clone(),
            cmd_rx,
        ));

        Ap800Mixer {
            cmd_tx,
            event_tx,
            store,
            reader_handle,
        }
    }

    /// Submit a fully-formed wire frame for transmission.
    ///
    /// Fire-and-forget: success means the frame was handed to the reader
    /// task, not that the device acted on it. Pair with the pure builders
    /// in [`commands`](crate::commands) for operations without a typed
    /// method here.
    pub async fn send(&self, frame: Vec<u8>) -> Result<()> {
        self.cmd_tx
            .send(ReaderCommand::Frame(frame))
            .await
            .map_err(|_| Error::NotConnected)
    }

    /// Subscribe to mixer events.
    pub fn subscribe(&self) -> broadcast::Receiver<MixerEvent> {
        self.event_tx.subscribe()
    }

    /// Idempotently create the host-store devices replies are projected
    /// onto for one unit: the max-mics device and the eight microphone
    /// mute-status devices.
    pub fn provision_unit(&self, unit: UnitCode) -> Result<()> {
        let mut names = vec![naming::max_mics_device_name(unit)];
        names.extend((1..=8).map(|channel| naming::mic_mute_device_name(unit, channel)));

        for name in names {
            if self.store.exists(&name) {
                info!(device = %name, "duplicate device found - skipping creation");
                continue;
            }
            self.store.ensure_device(&name)?;
            debug!(device = %name, "device created");
        }
        Ok(())
    }

    /// Close the link: the reader task closes the transport, emits
    /// [`MixerEvent::Disconnected`], and exits.
    pub async fn close(&self) -> Result<()> {
        info!("Disconnecting from AP800...");
        self.cmd_tx
            .send(ReaderCommand::Shutdown)
            .await
            .map_err(|_| Error::NotConnected)
    }

    /// Emit the connected event; called once by the builder.
    pub(crate) fn announce_connected(&self) {
        let _ = self.event_tx.send(MixerEvent::Connected);
    }

    // -----------------------------------------------------------------
    // Typed conveniences for the projected controls
    // -----------------------------------------------------------------

    /// Mute or unmute a channel.
    pub async fn set_mute(
        &self,
        unit: UnitCode,
        channel: Channel,
        channel_type: ChannelType,
        muted: bool,
    ) -> Result<()> {
        debug!(%unit, %channel, %channel_type, muted, "setting mute");
        self.send(commands::cmd_set_mute(unit, channel, channel_type, muted))
            .await
    }

    /// Toggle the mute state of a channel.
    pub async fn toggle_mute(
        &self,
        unit: UnitCode,
        channel: Channel,
        channel_type: ChannelType,
    ) -> Result<()> {
        debug!(%unit, %channel, %channel_type, "toggling mute");
        self.send(commands::cmd_toggle_mute(unit, channel, channel_type))
            .await
    }

    /// Query the mute state of a channel; the reply is projected onto the
    /// device store when it arrives.
    pub async fn request_mute(
        &self,
        unit: UnitCode,
        channel: Channel,
        channel_type: ChannelType,
    ) -> Result<()> {
        self.send(commands::cmd_request_mute(unit, channel, channel_type))
            .await
    }

    /// Set the maximum number of simultaneously active microphones
    /// (clamped to 0..8).
    pub async fn set_max_active_mics(&self, unit: UnitCode, max_mics: i32) -> Result<()> {
        debug!(%unit, max_mics, "setting max active mics");
        self.send(commands::cmd_set_max_active_mics(unit, max_mics))
            .await
    }

    /// Query the maximum-active-microphones limit; the reply is projected
    /// onto the device store when it arrives.
    pub async fn request_max_active_mics(&self, unit: UnitCode) -> Result<()> {
        self.send(commands::cmd_request_max_active_mics(unit)).await
    }

    /// Request a unit's factory unique ID. Used as the connectivity probe
    /// at connect time.
    pub async fn request_unique_id(&self, unit: UnitCode) -> Result<()> {
        self.send(commands::cmd_request_unique_id(unit)).await
    }

    /// Request a unit's firmware version.
    pub async fn request_version(&self, unit: UnitCode) -> Result<()> {
        self.send(commands::cmd_request_version(unit)).await
    }
}

// ---------------------------------------------------------------------------
// Reader task
// ---------------------------------------------------------------------------

/// The main loop of the background reader task.
///
/// Owns the transport exclusively. Prioritizes outbound frames, then reads
/// inbound bytes, delimits them on carriage returns, and dispatches each
/// complete frame.
async fn reader_loop(
    mut transport: Box<dyn Transport>,
    dispatcher: ReplyDispatcher,
    event_tx: broadcast::Sender<MixerEvent>,
    mut cmd_rx: mpsc::Receiver<ReaderCommand>,
) {
    let mut frame_buf: Vec<u8> = Vec::new();

    loop {
        tokio::select! {
            biased;

            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(ReaderCommand::Frame(frame)) => {
                        trace!(data = ?frame, "DATA OUT");
                        if let Err(e) = transport.send(&frame).await {
                            warn!(error = %e, "failed to send command frame");
                        }
                    }
                    Some(ReaderCommand::Shutdown) => {
                        debug!("shutdown requested, exiting reader loop");
                        break;
                    }
                    None => {
                        // All senders dropped -- the driver was dropped.
                        debug!("command channel closed, exiting reader loop");
                        break;
                    }
                }
            }

            _ = async {
                let mut buf = [0u8; 256];
                match transport.receive(&mut buf, Duration::from_millis(100)).await {
                    Ok(n) if n > 0 => {
                        frame_buf.extend_from_slice(&buf[..n]);
                        drain_frames(&mut frame_buf, &dispatcher);
                    }
                    _ => {
                        // Timeout or error -- just loop back.
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    }
                }
            } => {}
        }
    }

    // Close the command channel before announcing, so an observer of
    // Disconnected can rely on sends failing from then on.
    drop(cmd_rx);
    let _ = transport.close().await;
    let _ = event_tx.send(MixerEvent::Disconnected);
}

/// Drain all complete carriage-return-delimited frames from the buffer,
/// decoding and dispatching each one. Incomplete data is left for the next
/// read cycle.
///
/// Line feeds are treated as frame delimiters too, so CRLF-terminating
/// units produce one frame plus an empty remainder rather than a frame
/// with a stray leading byte.
fn drain_frames(buf: &mut Vec<u8>, dispatcher: &ReplyDispatcher) {
    while let Some(pos) = buf.iter().position(|&b| b == TERMINATOR || b == b'\n') {
        let frame: Vec<u8> = buf.drain(..=pos).collect();
        let frame = &frame[..frame.len() - 1];
        if frame.is_empty() {
            continue;
        }

        trace!(data = ?frame, "DATA IN");
        match decode_reply(frame) {
            DecodeOutcome::Reply(reply) => dispatcher.dispatch(&reply),
            DecodeOutcome::ForeignFamily { unit_type } => {
                debug!(unit_type = %unit_type, "ignoring data not meant for the AP800");
            }
            DecodeOutcome::NoSync => {
                warn!(data = ?frame, "ignoring unexpected data received from mixer");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Ap800Builder;
    use mixlib_core::store::DiscreteStatus;
    use mixlib_test_harness::{MemoryDeviceStore, MockTransport};

    /// Poll until `cond` holds, panicking after a generous deadline.
    async fn eventually(what: &str, cond: impl Fn() -> bool) {
        for _ in 0..200 {
            if cond() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("condition not met within deadline: {what}");
    }

    async fn make_mixer() -> (
        Ap800Mixer,
        Arc<MemoryDeviceStore>,
        mixlib_test_harness::SentFrames,
        mixlib_test_harness::ReplyInjector,
    ) {
        let store = Arc::new(MemoryDeviceStore::new());
        let mock = MockTransport::new();
        let sent = mock.sent_frames();
        let injector = mock.injector();

        let mixer = Ap800Builder::new()
            .device_store(store.clone())
            .provision_unit(UnitCode::new(0))
            .provision_unit(UnitCode::new(2))
            .build_with_transport(Box::new(mock))
            .await
            .unwrap();

        (mixer, store, sent, injector)
    }

    // -----------------------------------------------------------------
    // Outbound path
    // -----------------------------------------------------------------

    #[tokio::test]
    async fn connect_probe_is_sent() {
        let (_mixer, _store, sent, _injector) = make_mixer().await;
        eventually("UID probe sent", || sent.contains(b"#10 UID\r")).await;
    }

    #[tokio::test]
    async fn typed_mute_command_reaches_the_wire() {
        let (mixer, _store, sent, _injector) = make_mixer().await;

        mixer
            .set_mute(
                UnitCode::new(2),
                Channel::Number(3),
                ChannelType::Input,
                true,
            )
            .await
            .unwrap();

        eventually("mute frame sent", || sent.contains(b"#12 MUTE 3 I 1\r")).await;
    }

    #[tokio::test]
    async fn raw_send_reaches_the_wire() {
        let (mixer, _store, sent, _injector) = make_mixer().await;

        mixer
            .send(commands::cmd_set_hold_time(UnitCode::new(0), 50))
            .await
            .unwrap();

        eventually("clamped hold frame sent", || {
            sent.contains(b"#10 HOLD 100\r")
        })
        .await;
    }

    // -----------------------------------------------------------------
    // Inbound path -- projection through the store
    // -----------------------------------------------------------------

    #[tokio::test]
    async fn max_mics_reply_is_projected() {
        let (_mixer, store, _sent, injector) = make_mixer().await;

        injector.inject(b"#10 MMAX 4\r");

        let name = naming::max_mics_device_name(UnitCode::new(0));
        eventually("max-mics projected", || {
            store.string_value(&name).as_deref() == Some("4")
        })
        .await;
    }

    #[tokio::test]
    async fn mute_reply_is_projected() {
        let (_mixer, store, _sent, injector) = make_mixer().await;

        injector.inject(b"#12 MUTE 3 I 1\r");

        let name = naming::mic_mute_device_name(UnitCode::new(2), 3);
        eventually("mute projected", || {
            store.status(&name) == Some(DiscreteStatus::On)
        })
        .await;
    }

    #[tokio::test]
    async fn noisy_frame_is_still_decoded() {
        let (_mixer, store, _sent, injector) = make_mixer().await;

        injector.inject(b"garbage#12 MUTE 3 I 1\r");

        let name = naming::mic_mute_device_name(UnitCode::new(2), 3);
        eventually("noisy mute projected", || {
            store.status(&name) == Some(DiscreteStatus::On)
        })
        .await;
    }

    #[tokio::test]
    async fn frame_split_across_chunks_is_reassembled() {
        let (_mixer, store, _sent, injector) = make_mixer().await;

        injector.inject(b"#10 MM");
        injector.inject(b"AX 6\r");

        let name = naming::max_mics_device_name(UnitCode::new(0));
        eventually("split frame projected", || {
            store.string_value(&name).as_deref() == Some("6")
        })
        .await;
    }

    #[tokio::test]
    async fn concatenated_frames_are_processed_in_order() {
        let (_mixer, store, _sent, injector) = make_mixer().await;

        injector.inject(b"#12 MUTE 3 I 1\r#10 MMAX 4\r");

        let mute_name = naming::mic_mute_device_name(UnitCode::new(2), 3);
        let mmax_name = naming::max_mics_device_name(UnitCode::new(0));
        eventually("both frames projected", || {
            store.status(&mute_name) == Some(DiscreteStatus::On)
                && store.string_value(&mmax_name).as_deref() == Some("4")
        })
        .await;
    }

    #[tokio::test]
    async fn foreign_family_frame_mutates_nothing() {
        let (_mixer, store, _sent, injector) = make_mixer().await;

        // A foreign frame followed by a marker frame; once the marker has
        // been projected, the foreign frame is known to have been seen.
        injector.inject(b"#32 MUTE 3 I 1\r#10 MMAX 4\r");

        let mmax_name = naming::max_mics_device_name(UnitCode::new(0));
        eventually("marker projected", || {
            store.string_value(&mmax_name).is_some()
        })
        .await;
        assert!(store.all_statuses().is_empty());
    }

    #[tokio::test]
    async fn filtered_mute_replies_mutate_nothing() {
        let (_mixer, store, _sent, injector) = make_mixer().await;

        injector.inject(b"#12 MUTE 0 I 1\r#12 MUTE 3 O 1\r#10 MMAX 4\r");

        let mmax_name = naming::max_mics_device_name(UnitCode::new(0));
        eventually("marker projected", || {
            store.string_value(&mmax_name).is_some()
        })
        .await;
        assert!(store.all_statuses().is_empty());
    }

    // -----------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------

    #[tokio::test]
    async fn projected_replies_emit_events() {
        let (mixer, _store, _sent, injector) = make_mixer().await;
        let mut events = mixer.subscribe();

        injector.inject(b"#10 MMAX 8\r");

        match events.recv().await.unwrap() {
            MixerEvent::MaxMicsChanged { unit, count } => {
                assert_eq!(unit.code(), 0);
                assert_eq!(count, "8");
            }
            other => panic!("expected MaxMicsChanged, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn device_error_reply_emits_event() {
        let (mixer, _store, _sent, injector) = make_mixer().await;
        let mut events = mixer.subscribe();

        injector.inject(b"#10 ERROR 6\r");

        match events.recv().await.unwrap() {
            MixerEvent::DeviceError {
                code, description, ..
            } => {
                assert_eq!(code, 6);
                assert_eq!(description, "Unrecognized command");
            }
            other => panic!("expected DeviceError, got {other:?}"),
        }
    }

    // -----------------------------------------------------------------
    // Provisioning
    // -----------------------------------------------------------------

    #[tokio::test]
    async fn provisioning_creates_nine_devices_per_unit() {
        let (_mixer, store, _sent, _injector) = make_mixer().await;
        // Two provisioned units, nine devices each.
        assert_eq!(store.device_count(), 18);
    }

    #[tokio::test]
    async fn provisioning_is_idempotent() {
        let (mixer, store, _sent, _injector) = make_mixer().await;

        mixer.provision_unit(UnitCode::new(0)).unwrap();
        mixer.provision_unit(UnitCode::new(0)).unwrap();

        assert_eq!(store.device_count(), 18);
    }

    // -----------------------------------------------------------------
    // Shutdown
    // -----------------------------------------------------------------

    #[tokio::test]
    async fn close_emits_disconnected_and_stops_sends() {
        let (mixer, _store, _sent, _injector) = make_mixer().await;
        let mut events = mixer.subscribe();

        mixer.close().await.unwrap();

        loop {
            match events.recv().await.unwrap() {
                MixerEvent::Disconnected => break,
                _ => continue,
            }
        }

        // The reader has exited and the command channel is closed;
        // further sends fail.
        let result = mixer.request_version(UnitCode::new(0)).await;
        assert!(matches!(result, Err(Error::NotConnected)));
    }
}
