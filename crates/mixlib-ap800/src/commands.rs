//! AP800 command builders.
//!
//! One typed function per protocol operation. Each builder constructs the
//! wire bytes for a single command from semantically named parameters,
//! applying the range policy ([`policy`](crate::policy)) or enumeration
//! mapping ([`types`](crate::types)) before encoding.
//!
//! All functions are pure -- they produce byte vectors without performing
//! any I/O. The caller is responsible for handing the bytes to a transport.
//!
//! Stateful controls come in up to three shapes:
//! - **set** -- apply an absolute value;
//! - **toggle** -- send the wire code `2` to flip the current state
//!   (supported by AGC, EQ, mute, and the front-panel lock);
//! - **request** -- query the current value. Request forms omit the value
//!   token entirely; the device's parser is positional and does not accept
//!   an empty token in its place.
//!
//! Channel alphabets are command-specific and noted on each builder.

use mixlib_core::UnitCode;

use crate::policy;
use crate::protocol::encode_command;
use crate::types::{
    BaudRate, Channel, ChannelType, DecayRate, EcReference, EqBand, GatingMode, LastMicMode,
    MasterMode, MeterSource, MicInputGain, NlpMode,
};

/// Wire rendering of a boolean flag.
fn flag(on: bool) -> &'static str {
    if on { "1" } else { "0" }
}

/// Wire code for the "flip current state" toggle.
const TOGGLE: &str = "2";

// ---------------------------------------------------------------
// Adaptive ambient (AAMB)
// ---------------------------------------------------------------

/// Enable or disable adaptive ambient for microphone channel(s).
///
/// `channel`: 1-8, or `*` for all microphones.
pub fn cmd_enable_adaptive_ambient(unit: UnitCode, channel: Channel, enabled: bool) -> Vec<u8> {
    encode_command(unit, "AAMB", &[&channel.to_string(), flag(enabled)])
}

/// Request the adaptive ambient state for microphone channel(s).
pub fn cmd_request_adaptive_ambient(unit: UnitCode, channel: Channel) -> Vec<u8> {
    encode_command(unit, "AAMB", &[&channel.to_string()])
}

// ---------------------------------------------------------------
// Automatic gain control (AGC)
// ---------------------------------------------------------------

/// Enable or disable automatic gain control for microphone channel(s).
///
/// `channel`: 1-8, or `*` for all microphones.
pub fn cmd_enable_auto_gain_control(unit: UnitCode, channel: Channel, enabled: bool) -> Vec<u8> {
    encode_command(unit, "AGC", &[&channel.to_string(), flag(enabled)])
}

/// Toggle automatic gain control for microphone channel(s).
pub fn cmd_toggle_auto_gain_control(unit: UnitCode, channel: Channel) -> Vec<u8> {
    encode_command(unit, "AGC", &[&channel.to_string(), TOGGLE])
}

/// Request the automatic gain control state for microphone channel(s).
pub fn cmd_request_auto_gain_control(unit: UnitCode, channel: Channel) -> Vec<u8> {
    encode_command(unit, "AGC", &[&channel.to_string()])
}

// ---------------------------------------------------------------
// Ambient level (AMBLVL)
// ---------------------------------------------------------------

/// Set the fixed ambient level in dB.
///
/// The level only takes effect while adaptive ambient is disabled.
/// Values outside -70..0 dB are clamped to the boundary.
pub fn cmd_set_ambient_level(unit: UnitCode, level_db: i32) -> Vec<u8> {
    let level = policy::AMBIENT_LEVEL_DB.clamp(level_db);
    encode_command(unit, "AMBLVL", &[&level.to_string()])
}

/// Request the fixed ambient level.
pub fn cmd_request_ambient_level(unit: UnitCode) -> Vec<u8> {
    encode_command(unit, "AMBLVL", &[])
}

// ---------------------------------------------------------------
// Baud rate (BAUD)
// ---------------------------------------------------------------

/// Set the baud rate of the unit's RS-232 port.
///
/// Takes effect on the device side immediately; the host link must be
/// reopened at the new rate. Use [`BaudRate::from_bps`] to map a raw
/// bits-per-second value (unsupported rates fall back to 9600).
pub fn cmd_set_baud_rate(unit: UnitCode, rate: BaudRate) -> Vec<u8> {
    encode_command(unit, "BAUD", &[&rate.code().to_string()])
}

/// Request the baud rate of the unit's RS-232 port.
pub fn cmd_request_baud_rate(unit: UnitCode) -> Vec<u8> {
    encode_command(unit, "BAUD", &[])
}

// ---------------------------------------------------------------
// Chairman override (CHAIRO)
// ---------------------------------------------------------------

/// Enable or disable chairman override for microphone channel(s).
///
/// `channel`: 1-8, or `*` for all microphones.
pub fn cmd_enable_chairman_override(unit: UnitCode, channel: Channel, enabled: bool) -> Vec<u8> {
    encode_command(unit, "CHAIRO", &[&channel.to_string(), flag(enabled)])
}

/// Request the chairman override state for microphone channel(s).
pub fn cmd_request_chairman_override(unit: UnitCode, channel: Channel) -> Vec<u8> {
    encode_command(unit, "CHAIRO", &[&channel.to_string()])
}

// ---------------------------------------------------------------
// Decay rate (DECAY)
// ---------------------------------------------------------------

/// Set the gate decay rate.
pub fn cmd_set_decay_rate(unit: UnitCode, rate: DecayRate) -> Vec<u8> {
    encode_command(unit, "DECAY", &[&rate.code().to_string()])
}

/// Request the gate decay rate.
pub fn cmd_request_decay_rate(unit: UnitCode) -> Vec<u8> {
    encode_command(unit, "DECAY", &[])
}

// ---------------------------------------------------------------
// Default meter (DFLTM)
// ---------------------------------------------------------------

/// Set the channel shown on the front-panel default meter.
///
/// `channel`: input 1-8 or output A-D; `is_input` selects which alphabet
/// the channel belongs to.
pub fn cmd_set_default_meter(unit: UnitCode, channel: Channel, is_input: bool) -> Vec<u8> {
    let kind = if is_input { "I" } else { "O" };
    encode_command(unit, "DFLTM", &[&channel.to_string(), kind])
}

/// Request the default meter assignment.
pub fn cmd_request_default_meter(unit: UnitCode) -> Vec<u8> {
    encode_command(unit, "DFLTM", &[])
}

// ---------------------------------------------------------------
// Echo canceller (EC, ERL, ERLE)
// ---------------------------------------------------------------

/// Enable or disable the echo canceller for microphone channel(s).
///
/// `channel`: 1-8, or `*` for all microphones.
pub fn cmd_enable_echo_canceller(unit: UnitCode, channel: Channel, enabled: bool) -> Vec<u8> {
    encode_command(unit, "EC", &[&channel.to_string(), flag(enabled)])
}

/// Request the echo canceller state for microphone channel(s).
pub fn cmd_request_echo_canceller(unit: UnitCode, channel: Channel) -> Vec<u8> {
    encode_command(unit, "EC", &[&channel.to_string()])
}

/// Request the echo return loss reading for a microphone channel.
pub fn cmd_request_echo_return_loss(unit: UnitCode, channel: Channel) -> Vec<u8> {
    encode_command(unit, "ERL", &[&channel.to_string()])
}

/// Request the echo return loss enhancement reading for a microphone
/// channel.
pub fn cmd_request_echo_return_loss_enhancement(unit: UnitCode, channel: Channel) -> Vec<u8> {
    encode_command(unit, "ERLE", &[&channel.to_string()])
}

// ---------------------------------------------------------------
// Equalizer (EQ)
// ---------------------------------------------------------------

/// Enable or disable the equalizer for microphone channel(s).
///
/// `channel`: 1-8, or `*` for all microphones.
pub fn cmd_enable_equalizer(unit: UnitCode, channel: Channel, enabled: bool) -> Vec<u8> {
    encode_command(unit, "EQ", &[&channel.to_string(), flag(enabled)])
}

/// Toggle the equalizer for microphone channel(s).
pub fn cmd_toggle_equalizer(unit: UnitCode, channel: Channel) -> Vec<u8> {
    encode_command(unit, "EQ", &[&channel.to_string(), TOGGLE])
}

/// Request the equalizer state for microphone channel(s).
pub fn cmd_request_equalizer(unit: UnitCode, channel: Channel) -> Vec<u8> {
    encode_command(unit, "EQ", &[&channel.to_string()])
}

// ---------------------------------------------------------------
// Hardware flow control (FLOW)
// ---------------------------------------------------------------

/// Enable or disable hardware flow control on the unit's serial port.
pub fn cmd_enable_flow_control(unit: UnitCode, enabled: bool) -> Vec<u8> {
    encode_command(unit, "FLOW", &[flag(enabled)])
}

/// Request the hardware flow control state.
pub fn cmd_request_flow_control(unit: UnitCode) -> Vec<u8> {
    encode_command(unit, "FLOW", &[])
}

// ---------------------------------------------------------------
// First mic priority (FMP)
// ---------------------------------------------------------------

/// Enable or disable first-microphone-priority mode.
pub fn cmd_enable_first_mic_priority(unit: UnitCode, enabled: bool) -> Vec<u8> {
    encode_command(unit, "FMP", &[flag(enabled)])
}

/// Request the first-microphone-priority mode.
pub fn cmd_request_first_mic_priority(unit: UnitCode) -> Vec<u8> {
    encode_command(unit, "FMP", &[])
}

// ---------------------------------------------------------------
// Front panel passcode (FPP)
// ---------------------------------------------------------------

/// Set the front panel passcode.
pub fn cmd_set_front_panel_passcode(unit: UnitCode, passcode: &str) -> Vec<u8> {
    encode_command(unit, "FPP", &[passcode])
}

/// Request the front panel passcode.
pub fn cmd_request_front_panel_passcode(unit: UnitCode) -> Vec<u8> {
    encode_command(unit, "FPP", &[])
}

// ---------------------------------------------------------------
// Gain (GAIN)
// ---------------------------------------------------------------

/// Set the gain on a channel.
///
/// `channel`: 1-8 (inputs), A-D (outputs), 1-2 (subbus), or `*` for all
/// channels of `channel_type`. `level_db` covers -20..20 dB; the trailing
/// selector token is `A` for an absolute setting or `R` for a change
/// relative to the current value.
pub fn cmd_set_gain(
    unit: UnitCode,
    channel: Channel,
    channel_type: ChannelType,
    level_db: i32,
    relative: bool,
) -> Vec<u8> {
    let selector = if relative { "R" } else { "A" };
    encode_command(
        unit,
        "GAIN",
        &[
            &channel.to_string(),
            &channel_type.to_string(),
            &level_db.to_string(),
            selector,
        ],
    )
}

/// Request the gain on a channel.
pub fn cmd_request_gain(unit: UnitCode, channel: Channel, channel_type: ChannelType) -> Vec<u8> {
    encode_command(
        unit,
        "GAIN",
        &[&channel.to_string(), &channel_type.to_string()],
    )
}

// ---------------------------------------------------------------
// Gating (GATE, GMODE, GRATIO)
// ---------------------------------------------------------------

/// Request the gating status of all microphone channels.
pub fn cmd_request_gate_status(unit: UnitCode) -> Vec<u8> {
    encode_command(unit, "GATE", &[])
}

/// Set the gating mode for microphone channel(s).
///
/// `channel`: 1-8, or `*` for all microphones.
pub fn cmd_set_gating_mode(unit: UnitCode, channel: Channel, mode: GatingMode) -> Vec<u8> {
    encode_command(
        unit,
        "GMODE",
        &[&channel.to_string(), &mode.code().to_string()],
    )
}

/// Request the gating mode for microphone channel(s).
pub fn cmd_request_gating_mode(unit: UnitCode, channel: Channel) -> Vec<u8> {
    encode_command(unit, "GMODE", &[&channel.to_string()])
}

/// Set the gate ratio in dB.
///
/// Unit-scoped; the gate ratio applies to the whole unit, matching the
/// request form. Values outside 0..50 dB are clamped to the boundary.
pub fn cmd_set_gate_ratio(unit: UnitCode, ratio_db: i32) -> Vec<u8> {
    let ratio = policy::GATE_RATIO_DB.clamp(ratio_db);
    encode_command(unit, "GRATIO", &[&ratio.to_string()])
}

/// Request the gate ratio.
pub fn cmd_request_gate_ratio(unit: UnitCode) -> Vec<u8> {
    encode_command(unit, "GRATIO", &[])
}

// ---------------------------------------------------------------
// Hold time (HOLD)
// ---------------------------------------------------------------

/// Set the gate hold time in milliseconds.
///
/// Values outside 100..8000 ms are clamped to the boundary.
pub fn cmd_set_hold_time(unit: UnitCode, hold_ms: i32) -> Vec<u8> {
    let hold = policy::HOLD_TIME_MS.clamp(hold_ms);
    encode_command(unit, "HOLD", &[&hold.to_string()])
}

/// Request the gate hold time.
pub fn cmd_request_hold_time(unit: UnitCode) -> Vec<u8> {
    encode_command(unit, "HOLD", &[])
}

// ---------------------------------------------------------------
// Front panel lock (LFP)
// ---------------------------------------------------------------

/// Lock or unlock the front panel.
pub fn cmd_set_front_panel_lock(unit: UnitCode, locked: bool) -> Vec<u8> {
    encode_command(unit, "LFP", &[flag(locked)])
}

/// Toggle the front panel lock.
pub fn cmd_toggle_front_panel_lock(unit: UnitCode) -> Vec<u8> {
    encode_command(unit, "LFP", &[TOGGLE])
}

/// Request the front panel lock state.
pub fn cmd_request_front_panel_lock(unit: UnitCode) -> Vec<u8> {
    encode_command(unit, "LFP", &[])
}

// ---------------------------------------------------------------
// Last mic on (LMO)
// ---------------------------------------------------------------

/// Set the last-microphone-on mode.
pub fn cmd_set_last_mic_mode(unit: UnitCode, mode: LastMicMode) -> Vec<u8> {
    encode_command(unit, "LMO", &[&mode.code().to_string()])
}

/// Request the last-microphone-on mode.
pub fn cmd_request_last_mic_mode(unit: UnitCode) -> Vec<u8> {
    encode_command(unit, "LMO", &[])
}

// ---------------------------------------------------------------
// Level metering (LVL)
// ---------------------------------------------------------------

/// Request the level of a channel.
///
/// `channel`: 1-8 or A-D; `source` selects the input, output, or adaptive
/// ambient meter.
pub fn cmd_request_level(unit: UnitCode, channel: Channel, source: MeterSource) -> Vec<u8> {
    encode_command(unit, "LVL", &[&channel.to_string(), &source.to_string()])
}

// ---------------------------------------------------------------
// Master mode (MASTER)
// ---------------------------------------------------------------

/// Set the unit's master/slave role on a linked chain.
pub fn cmd_set_master_mode(unit: UnitCode, mode: MasterMode) -> Vec<u8> {
    encode_command(unit, "MASTER", &[&mode.code().to_string()])
}

/// Request the unit's master/slave role.
pub fn cmd_request_master_mode(unit: UnitCode) -> Vec<u8> {
    encode_command(unit, "MASTER", &[])
}

// ---------------------------------------------------------------
// Modem (MDMODE, MINIT, MPASS)
// ---------------------------------------------------------------

/// Enable or disable modem mode on the unit's serial port.
pub fn cmd_enable_modem_mode(unit: UnitCode, enabled: bool) -> Vec<u8> {
    encode_command(unit, "MDMODE", &[flag(enabled)])
}

/// Request the modem mode state.
pub fn cmd_request_modem_mode(unit: UnitCode) -> Vec<u8> {
    encode_command(unit, "MDMODE", &[])
}

/// Set the modem initialization string.
pub fn cmd_set_modem_init_string(unit: UnitCode, init: &str) -> Vec<u8> {
    encode_command(unit, "MINIT", &[init])
}

/// Set the modem access password.
pub fn cmd_set_modem_password(unit: UnitCode, password: &str) -> Vec<u8> {
    encode_command(unit, "MPASS", &[password])
}

// ---------------------------------------------------------------
// Mic equalizer (MEQ)
// ---------------------------------------------------------------

/// Set a microphone equalizer band adjustment.
///
/// `channel`: 1-8, or `*` for all microphones. `value` covers -12..12.
pub fn cmd_set_mic_eq(unit: UnitCode, channel: Channel, band: EqBand, value: i32) -> Vec<u8> {
    encode_command(
        unit,
        "MEQ",
        &[&channel.to_string(), &band.to_string(), &value.to_string()],
    )
}

/// Request a microphone equalizer band adjustment.
pub fn cmd_request_mic_eq(unit: UnitCode, channel: Channel, band: EqBand) -> Vec<u8> {
    encode_command(unit, "MEQ", &[&channel.to_string(), &band.to_string()])
}

// ---------------------------------------------------------------
// Mic high-pass filter (MHP)
// ---------------------------------------------------------------

/// Enable or disable the microphone high-pass filter.
///
/// `channel`: 1-8, or `*` for all microphones.
pub fn cmd_enable_mic_high_pass(unit: UnitCode, channel: Channel, enabled: bool) -> Vec<u8> {
    encode_command(unit, "MHP", &[&channel.to_string(), flag(enabled)])
}

/// Request the microphone high-pass filter state.
pub fn cmd_request_mic_high_pass(unit: UnitCode, channel: Channel) -> Vec<u8> {
    encode_command(unit, "MHP", &[&channel.to_string()])
}

// ---------------------------------------------------------------
// Mic input gain (MLINE)
// ---------------------------------------------------------------

/// Set the coarse input gain for microphone channel(s).
pub fn cmd_set_mic_input_gain(unit: UnitCode, channel: Channel, gain: MicInputGain) -> Vec<u8> {
    encode_command(
        unit,
        "MLINE",
        &[&channel.to_string(), &gain.code().to_string()],
    )
}

/// Request the coarse input gain for microphone channel(s).
pub fn cmd_request_mic_input_gain(unit: UnitCode, channel: Channel) -> Vec<u8> {
    encode_command(unit, "MLINE", &[&channel.to_string()])
}

// ---------------------------------------------------------------
// Max active mics (MMAX)
// ---------------------------------------------------------------

/// Set the maximum number of simultaneously active microphones.
///
/// 0 means no limit. Values outside 0..8 are clamped to the boundary.
pub fn cmd_set_max_active_mics(unit: UnitCode, max_mics: i32) -> Vec<u8> {
    let max = policy::MAX_ACTIVE_MICS.clamp(max_mics);
    encode_command(unit, "MMAX", &[&max.to_string()])
}

/// Request the maximum number of simultaneously active microphones.
pub fn cmd_request_max_active_mics(unit: UnitCode) -> Vec<u8> {
    encode_command(unit, "MMAX", &[])
}

// ---------------------------------------------------------------
// Mic echo canceller reference (MREF, REFSEL)
// ---------------------------------------------------------------

/// Set the echo canceller reference for microphone channel(s).
///
/// `channel`: 1-8, or `*` for all microphones. Only
/// [`EcReference::Ref1`] and [`EcReference::Ref2`] are meaningful per
/// microphone.
pub fn cmd_set_mic_ec_reference(
    unit: UnitCode,
    channel: Channel,
    reference: EcReference,
) -> Vec<u8> {
    encode_command(
        unit,
        "MREF",
        &[&channel.to_string(), &reference.code().to_string()],
    )
}

/// Request the echo canceller reference for microphone channel(s).
pub fn cmd_request_mic_ec_reference(unit: UnitCode, channel: Channel) -> Vec<u8> {
    encode_command(unit, "MREF", &[&channel.to_string()])
}

/// Select the output a reference channel points at.
///
/// `output`: 1-8 or A-D, `E` for the G-Link reference bus, `F` for none.
pub fn cmd_set_ec_reference_output(
    unit: UnitCode,
    reference: EcReference,
    output: Channel,
) -> Vec<u8> {
    encode_command(
        unit,
        "REFSEL",
        &[&reference.code().to_string(), &output.to_string()],
    )
}

/// Request the output a reference channel points at.
pub fn cmd_request_ec_reference_output(unit: UnitCode, reference: EcReference) -> Vec<u8> {
    encode_command(unit, "REFSEL", &[&reference.code().to_string()])
}

// ---------------------------------------------------------------
// Matrix routing (MTRX)
// ---------------------------------------------------------------

/// Set the routing matrix for an input channel.
///
/// `in_channel`: matrix input 1-25. `out_mix` is the output mix as a hex
/// bitfield, rendered verbatim (one flag bit per output; see the unit's
/// matrix documentation for bit assignments).
pub fn cmd_set_matrix_routing(unit: UnitCode, in_channel: Channel, out_mix: &str) -> Vec<u8> {
    encode_command(unit, "MTRX", &[&in_channel.to_string(), out_mix])
}

// ---------------------------------------------------------------
// Mute (MUTE)
// ---------------------------------------------------------------

/// Mute or unmute a channel.
///
/// `channel`: 1-8 or `*` (inputs), A-D (outputs), 1-2 (subbus), with the
/// kind selected by `channel_type`.
pub fn cmd_set_mute(
    unit: UnitCode,
    channel: Channel,
    channel_type: ChannelType,
    muted: bool,
) -> Vec<u8> {
    encode_command(
        unit,
        "MUTE",
        &[
            &channel.to_string(),
            &channel_type.to_string(),
            flag(muted),
        ],
    )
}

/// Toggle the mute state of a channel.
pub fn cmd_toggle_mute(unit: UnitCode, channel: Channel, channel_type: ChannelType) -> Vec<u8> {
    encode_command(
        unit,
        "MUTE",
        &[&channel.to_string(), &channel_type.to_string(), TOGGLE],
    )
}

/// Request the mute state of a channel.
pub fn cmd_request_mute(unit: UnitCode, channel: Channel, channel_type: ChannelType) -> Vec<u8> {
    encode_command(
        unit,
        "MUTE",
        &[&channel.to_string(), &channel_type.to_string()],
    )
}

// ---------------------------------------------------------------
// Nonlinear processing (NLP)
// ---------------------------------------------------------------

/// Set the nonlinear processing mode for microphone channel(s).
///
/// `channel`: 1-8, or `*` for all microphones.
pub fn cmd_set_nlp_mode(unit: UnitCode, channel: Channel, mode: NlpMode) -> Vec<u8> {
    encode_command(
        unit,
        "NLP",
        &[&channel.to_string(), &mode.code().to_string()],
    )
}

/// Request the nonlinear processing mode for microphone channel(s).
pub fn cmd_request_nlp_mode(unit: UnitCode, channel: Channel) -> Vec<u8> {
    encode_command(unit, "NLP", &[&channel.to_string()])
}

// ---------------------------------------------------------------
// NOM attenuation (NOM)
// ---------------------------------------------------------------

/// Enable or disable number-of-open-mics attenuation for channel(s).
///
/// `channel`: 1-8, or `*` for all microphones.
pub fn cmd_enable_nom_attenuation(unit: UnitCode, channel: Channel, enabled: bool) -> Vec<u8> {
    encode_command(unit, "NOM", &[&channel.to_string(), flag(enabled)])
}

/// Request the number-of-open-mics attenuation state for channel(s).
pub fn cmd_request_nom_attenuation(unit: UnitCode, channel: Channel) -> Vec<u8> {
    encode_command(unit, "NOM", &[&channel.to_string()])
}

// ---------------------------------------------------------------
// Off attenuation (OFFA)
// ---------------------------------------------------------------

/// Set the off attenuation in dB.
///
/// Values outside 0..50 dB are clamped to the boundary.
pub fn cmd_set_off_attenuation(unit: UnitCode, attenuation_db: i32) -> Vec<u8> {
    let attenuation = policy::OFF_ATTENUATION_DB.clamp(attenuation_db);
    encode_command(unit, "OFFA", &[&attenuation.to_string()])
}

/// Request the off attenuation.
pub fn cmd_request_off_attenuation(unit: UnitCode) -> Vec<u8> {
    encode_command(unit, "OFFA", &[])
}

// ---------------------------------------------------------------
// PA adaptive mode (PAA)
// ---------------------------------------------------------------

/// Enable or disable PA adaptive mode.
pub fn cmd_enable_pa_adaptive(unit: UnitCode, enabled: bool) -> Vec<u8> {
    encode_command(unit, "PAA", &[flag(enabled)])
}

/// Request the PA adaptive mode state.
pub fn cmd_request_pa_adaptive(unit: UnitCode) -> Vec<u8> {
    encode_command(unit, "PAA", &[])
}

// ---------------------------------------------------------------
// GPIO pin commands (PCMD, PEVNT)
// ---------------------------------------------------------------

/// Bind a command to a GPIO control pin.
///
/// `pin` is the pin locator from the unit's GPIO documentation; `command`
/// is one of LFP, PRESET, MUTE, GAIN, AGC, EQ, GMODE, or CHAIRO.
pub fn cmd_set_control_pin_command(unit: UnitCode, pin: &str, command: &str) -> Vec<u8> {
    encode_command(unit, "PCMD", &[pin, command])
}

/// Clear any command bound to a GPIO control pin.
pub fn cmd_clear_control_pin_command(unit: UnitCode, pin: &str) -> Vec<u8> {
    cmd_set_control_pin_command(unit, pin, "CLEAR")
}

/// Request the command bound to a GPIO control pin.
pub fn cmd_request_control_pin_command(unit: UnitCode, pin: &str) -> Vec<u8> {
    encode_command(unit, "PCMD", &[pin])
}

/// Bind a command to a GPIO status pin.
pub fn cmd_set_status_pin_command(unit: UnitCode, pin: &str, command: &str) -> Vec<u8> {
    encode_command(unit, "PEVNT", &[pin, command])
}

/// Clear any command bound to a GPIO status pin.
pub fn cmd_clear_status_pin_command(unit: UnitCode, pin: &str) -> Vec<u8> {
    cmd_set_status_pin_command(unit, pin, "CLEAR")
}

/// Request the command bound to a GPIO status pin.
pub fn cmd_request_status_pin_command(unit: UnitCode, pin: &str) -> Vec<u8> {
    encode_command(unit, "PEVNT", &[pin])
}

// ---------------------------------------------------------------
// Phantom power (PP)
// ---------------------------------------------------------------

/// Enable or disable phantom power for microphone channel(s).
///
/// `channel`: 1-8, or `*` for all microphones.
pub fn cmd_enable_phantom_power(unit: UnitCode, channel: Channel, enabled: bool) -> Vec<u8> {
    encode_command(unit, "PP", &[&channel.to_string(), flag(enabled)])
}

/// Request the phantom power state for microphone channel(s).
pub fn cmd_request_phantom_power(unit: UnitCode, channel: Channel) -> Vec<u8> {
    encode_command(unit, "PP", &[&channel.to_string()])
}

// ---------------------------------------------------------------
// Presets (PRESET)
// ---------------------------------------------------------------

/// Switch the unit to a stored preset (1-6).
pub fn cmd_use_preset(unit: UnitCode, preset: u8) -> Vec<u8> {
    encode_command(unit, "PRESET", &[&preset.to_string()])
}

/// Request the preset currently in use.
pub fn cmd_request_preset(unit: UnitCode) -> Vec<u8> {
    encode_command(unit, "PRESET", &[])
}

// ---------------------------------------------------------------
// Screen timeout (TOUT)
// ---------------------------------------------------------------

/// Set the front-panel screen timeout in minutes.
///
/// 0 disables the timeout. Values outside 0..15 are clamped to the
/// boundary.
pub fn cmd_set_screen_timeout(unit: UnitCode, minutes: i32) -> Vec<u8> {
    let minutes = policy::SCREEN_TIMEOUT_MIN.clamp(minutes);
    encode_command(unit, "TOUT", &[&minutes.to_string()])
}

/// Request the front-panel screen timeout.
pub fn cmd_request_screen_timeout(unit: UnitCode) -> Vec<u8> {
    encode_command(unit, "TOUT", &[])
}

// ---------------------------------------------------------------
// Identity (UID, VER)
// ---------------------------------------------------------------

/// Request the unit's factory-programmed unique ID.
///
/// Also useful as a connectivity probe right after opening the link.
pub fn cmd_request_unique_id(unit: UnitCode) -> Vec<u8> {
    encode_command(unit, "UID", &[])
}

/// Request the unit's firmware version.
pub fn cmd_request_version(unit: UnitCode) -> Vec<u8> {
    encode_command(unit, "VER", &[])
}
