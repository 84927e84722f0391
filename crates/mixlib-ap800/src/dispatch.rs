//! Reply dispatch and state projection.
//!
//! [`ReplyDispatcher`] routes each decoded [`Reply`] to the handler for its
//! [`ReplyKind`]. The kind was assigned once at the decode boundary, so the
//! dispatch here is an exhaustive match over a closed sum -- adding support
//! for a new reply means adding a variant and a handler, not editing a
//! string switch.
//!
//! The dispatcher is stateless and memoryless: every decode+dispatch cycle
//! is independent, with no cross-reply session state and no
//! pending-request tracking. Handlers consume their reply's argument
//! tokens left-to-right and are responsible for tolerating excess tokens
//! and rejecting missing ones.
//!
//! Handler failures never propagate; they degrade to "no effect,
//! diagnostic emitted".

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, trace, warn};

use mixlib_core::{DeviceStore, DiscreteStatus, MixerEvent};

use crate::naming;
use crate::protocol::{Reply, ReplyKind, describe_error};

/// Routes decoded replies to semantic handlers and projects their fields
/// onto the host device store.
pub struct ReplyDispatcher {
    store: Arc<dyn DeviceStore>,
    event_tx: broadcast::Sender<MixerEvent>,
}

impl ReplyDispatcher {
    /// Create a dispatcher projecting onto `store` and announcing changes
    /// on `event_tx`.
    pub fn new(store: Arc<dyn DeviceStore>, event_tx: broadcast::Sender<MixerEvent>) -> Self {
        ReplyDispatcher { store, event_tx }
    }

    /// Dispatch one decoded reply. Runs to completion before the next
    /// frame is processed; never fails.
    pub fn dispatch(&self, reply: &Reply) {
        match reply.kind {
            ReplyKind::MaxMics => self.handle_max_mics(reply),
            ReplyKind::Mute => self.handle_mute(reply),
            ReplyKind::DeviceError => self.handle_device_error(reply),
            ReplyKind::Ignored => {
                trace!(unit = %reply.unit, mnemonic = %reply.mnemonic, "reply has no handler, ignoring");
            }
            ReplyKind::Unknown => {
                warn!(unit = %reply.unit, mnemonic = %reply.mnemonic, "unknown reply: ignoring");
            }
        }
    }

    /// `MMAX <count>` -- project the reported limit verbatim as the string
    /// value of the unit's max-mics device.
    fn handle_max_mics(&self, reply: &Reply) {
        let Some(count) = reply.args.first() else {
            debug!(unit = %reply.unit, "MMAX reply missing count token");
            return;
        };

        let name = naming::max_mics_device_name(reply.unit);
        if let Err(e) = self.store.set_string_value(&name, count) {
            warn!(device = %name, error = %e, "failed to store max-mics value");
            return;
        }
        debug!(device = %name, count = %count, "max-mics value stored");

        let _ = self.event_tx.send(MixerEvent::MaxMicsChanged {
            unit: reply.unit,
            count: count.clone(),
        });
    }

    /// `MUTE <channel> <type> <flag>` -- project input-channel mute state
    /// onto the channel's mute-status device.
    ///
    /// Only microphone inputs are projected: the channel type must be `I`
    /// and the channel must be a non-zero number (the unit answers
    /// wildcard queries with channel `0` summaries, which name no single
    /// device).
    fn handle_mute(&self, reply: &Reply) {
        let (Some(channel_tok), Some(type_tok), Some(flag_tok)) = (
            reply.args.first(),
            reply.args.get(1),
            reply.args.get(2),
        ) else {
            debug!(unit = %reply.unit, args = ?reply.args, "MUTE reply missing tokens");
            return;
        };

        if !type_tok.eq_ignore_ascii_case("I") {
            return;
        }
        let channel: u8 = match channel_tok.parse() {
            Ok(n) if n != 0 => n,
            _ => return,
        };
        let muted = flag_tok == "1";

        let name = naming::mic_mute_device_name(reply.unit, channel);
        let status = if muted {
            DiscreteStatus::On
        } else {
            DiscreteStatus::Off
        };

        match self.store.device_ref(&name) {
            Some(device) => {
                if let Err(e) = self.store.set_discrete_status(device, status) {
                    warn!(device = %name, error = %e, "failed to store mute status");
                    return;
                }
                debug!(device = %name, muted, "mute status stored");
            }
            None => {
                warn!(device = %name, "mute status device not provisioned, skipping");
                return;
            }
        }

        let _ = self.event_tx.send(MixerEvent::MuteChanged {
            unit: reply.unit,
            channel,
            muted,
        });
    }

    /// `ERROR <code>` -- surface the unit's own error report. Diagnostic
    /// only; no corrective action is taken.
    fn handle_device_error(&self, reply: &Reply) {
        let code: u8 = reply
            .args
            .first()
            .and_then(|t| t.parse().ok())
            .unwrap_or(0);
        let description = describe_error(code);
        warn!(unit = %reply.unit, code, description, "unit reported an error");

        let _ = self.event_tx.send(MixerEvent::DeviceError {
            unit: reply.unit,
            code,
            description,
        });
    }
}
