//! AP800 channel designators and enumerated control values.
//!
//! The AP800 addresses channels with three alphabets depending on the
//! command: numeric (microphone inputs 1-8, matrix inputs 1-25), lettered
//! (outputs A-D, plus E/F in echo-canceller reference selection), and the
//! `*` wildcard meaning "all applicable channels". Which alphabet is legal
//! is command-specific and documented on each builder in
//! [`commands`](crate::commands).
//!
//! Enumerated controls (baud rate, decay rate, gating mode, ...) map a
//! semantic value to a single-digit wire code. Conversions *from* a code
//! never fail: an unrecognized code falls back to the documented default
//! for that control rather than producing an error.

use std::fmt;

/// A channel designator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// A numeric channel: microphone inputs 1-8, or matrix inputs 1-25.
    Number(u8),
    /// A lettered channel: outputs A-D, or E/F where a command defines them.
    Letter(char),
    /// The `*` wildcard: all channels of the applicable kind.
    Wildcard,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Number(n) => write!(f, "{n}"),
            Channel::Letter(c) => write!(f, "{c}"),
            Channel::Wildcard => write!(f, "*"),
        }
    }
}

/// The kind of channel a cross-kind command operates on.
///
/// Only meaningful for commands that span channel kinds (gain, mute).
/// Encoded on the wire as a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelType {
    /// Microphone/line input (`I`).
    Input,
    /// Output (`O`).
    Output,
    /// Subbus (`S`).
    Subbus,
}

impl ChannelType {
    /// The single-letter wire encoding.
    pub fn letter(&self) -> char {
        match self {
            ChannelType::Input => 'I',
            ChannelType::Output => 'O',
            ChannelType::Subbus => 'S',
        }
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Meter source selector for the level query (`LVL`).
///
/// Unlike [`ChannelType`], the level command's third alphabet entry is the
/// adaptive ambient meter, not the subbus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeterSource {
    /// Input meter (`I`).
    Input,
    /// Output meter (`O`).
    Output,
    /// Adaptive ambient meter (`A`).
    AdaptiveAmbient,
}

impl MeterSource {
    /// The single-letter wire encoding.
    pub fn letter(&self) -> char {
        match self {
            MeterSource::Input => 'I',
            MeterSource::Output => 'O',
            MeterSource::AdaptiveAmbient => 'A',
        }
    }
}

impl fmt::Display for MeterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Microphone equalizer band (`MEQ`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EqBand {
    /// High band (`H`).
    High,
    /// Mid band (`M`).
    Mid,
    /// Low band (`L`).
    Low,
}

impl EqBand {
    /// The single-letter wire encoding.
    pub fn letter(&self) -> char {
        match self {
            EqBand::High => 'H',
            EqBand::Mid => 'M',
            EqBand::Low => 'L',
        }
    }
}

impl fmt::Display for EqBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Serial baud rate of the unit's RS-232 port (`BAUD`).
///
/// Wire codes: 1 = 9600, 2 = 19200, 3 = 38400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaudRate {
    Baud9600,
    Baud19200,
    Baud38400,
}

impl BaudRate {
    /// The single-digit wire code.
    pub fn code(&self) -> u8 {
        match self {
            BaudRate::Baud9600 => 1,
            BaudRate::Baud19200 => 2,
            BaudRate::Baud38400 => 3,
        }
    }

    /// The rate in bits per second.
    pub fn bps(&self) -> u32 {
        match self {
            BaudRate::Baud9600 => 9600,
            BaudRate::Baud19200 => 19_200,
            BaudRate::Baud38400 => 38_400,
        }
    }

    /// Map a bits-per-second value to a baud rate.
    ///
    /// Any value the hardware does not support falls back to 9600 baud.
    pub fn from_bps(bps: u32) -> Self {
        match bps {
            19_200 => BaudRate::Baud19200,
            38_400 => BaudRate::Baud38400,
            9600 => BaudRate::Baud9600,
            _ => BaudRate::Baud9600,
        }
    }
}

impl fmt::Display for BaudRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} baud", self.bps())
    }
}

/// Gate decay rate (`DECAY`).
///
/// Wire codes: 1 = slow, 2 = medium, 3 = fast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecayRate {
    Slow,
    Medium,
    Fast,
}

impl DecayRate {
    /// The single-digit wire code.
    pub fn code(&self) -> u8 {
        match self {
            DecayRate::Slow => 1,
            DecayRate::Medium => 2,
            DecayRate::Fast => 3,
        }
    }

    /// Map a wire code back to a decay rate.
    ///
    /// Unrecognized codes fall back to [`DecayRate::Medium`], the unit's
    /// factory default.
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => DecayRate::Slow,
            3 => DecayRate::Fast,
            _ => DecayRate::Medium,
        }
    }
}

/// Gating mode of a microphone channel (`GMODE`).
///
/// Wire codes: 1 = auto, 2 = manual on, 3 = manual off, 4 = override on,
/// 5 = override off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatingMode {
    Auto,
    ManualOn,
    ManualOff,
    OverrideOn,
    OverrideOff,
}

impl GatingMode {
    /// The single-digit wire code.
    pub fn code(&self) -> u8 {
        match self {
            GatingMode::Auto => 1,
            GatingMode::ManualOn => 2,
            GatingMode::ManualOff => 3,
            GatingMode::OverrideOn => 4,
            GatingMode::OverrideOff => 5,
        }
    }

    /// Map a wire code back to a gating mode; unrecognized codes fall back
    /// to [`GatingMode::Auto`].
    pub fn from_code(code: u8) -> Self {
        match code {
            2 => GatingMode::ManualOn,
            3 => GatingMode::ManualOff,
            4 => GatingMode::OverrideOn,
            5 => GatingMode::OverrideOff,
            _ => GatingMode::Auto,
        }
    }
}

/// Master/slave role of a unit on a linked chain (`MASTER`).
///
/// Wire codes: 1 = master single, 2 = dual mixer, 3 = slave,
/// 4 = master linked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MasterMode {
    MasterSingle,
    DualMixer,
    Slave,
    MasterLinked,
}

impl MasterMode {
    /// The single-digit wire code.
    pub fn code(&self) -> u8 {
        match self {
            MasterMode::MasterSingle => 1,
            MasterMode::DualMixer => 2,
            MasterMode::Slave => 3,
            MasterMode::MasterLinked => 4,
        }
    }

    /// Map a wire code back to a master mode; unrecognized codes fall back
    /// to [`MasterMode::MasterSingle`].
    pub fn from_code(code: u8) -> Self {
        match code {
            2 => MasterMode::DualMixer,
            3 => MasterMode::Slave,
            4 => MasterMode::MasterLinked,
            _ => MasterMode::MasterSingle,
        }
    }
}

/// Last-microphone-on behavior (`LMO`).
///
/// Wire codes: 0 = off, 1 = microphone #1, 2 = last microphone on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastMicMode {
    Off,
    MicOne,
    LastOn,
}

impl LastMicMode {
    /// The single-digit wire code.
    pub fn code(&self) -> u8 {
        match self {
            LastMicMode::Off => 0,
            LastMicMode::MicOne => 1,
            LastMicMode::LastOn => 2,
        }
    }

    /// Map a wire code back; unrecognized codes fall back to
    /// [`LastMicMode::Off`].
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => LastMicMode::MicOne,
            2 => LastMicMode::LastOn,
            _ => LastMicMode::Off,
        }
    }
}

/// Nonlinear processing mode of the echo canceller (`NLP`).
///
/// Wire codes: 0 = off, 1 = soft, 2 = medium, 3 = aggressive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NlpMode {
    Off,
    Soft,
    Medium,
    Aggressive,
}

impl NlpMode {
    /// The single-digit wire code.
    pub fn code(&self) -> u8 {
        match self {
            NlpMode::Off => 0,
            NlpMode::Soft => 1,
            NlpMode::Medium => 2,
            NlpMode::Aggressive => 3,
        }
    }

    /// Map a wire code back; unrecognized codes fall back to
    /// [`NlpMode::Off`].
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => NlpMode::Soft,
            2 => NlpMode::Medium,
            3 => NlpMode::Aggressive,
            _ => NlpMode::Off,
        }
    }
}

/// Coarse microphone input gain (`MLINE`).
///
/// Wire codes: 1 = 55 dB, 2 = 25 dB, 3 = 0 dB (line level).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MicInputGain {
    Db55,
    Db25,
    LineLevel,
}

impl MicInputGain {
    /// The single-digit wire code.
    pub fn code(&self) -> u8 {
        match self {
            MicInputGain::Db55 => 1,
            MicInputGain::Db25 => 2,
            MicInputGain::LineLevel => 3,
        }
    }

    /// Map a wire code back; unrecognized codes fall back to
    /// [`MicInputGain::Db55`].
    pub fn from_code(code: u8) -> Self {
        match code {
            2 => MicInputGain::Db25,
            3 => MicInputGain::LineLevel,
            _ => MicInputGain::Db55,
        }
    }
}

/// Echo canceller reference selector (`MREF`, `REFSEL`).
///
/// Wire codes: 1 = EC Ref 1, 2 = EC Ref 2, 3 = G-Link EC Ref bus.
/// The per-microphone reference (`MREF`) only accepts Ref1/Ref2; the bus
/// selection (`REFSEL`) accepts all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcReference {
    Ref1,
    Ref2,
    GLink,
}

impl EcReference {
    /// The single-digit wire code.
    pub fn code(&self) -> u8 {
        match self {
            EcReference::Ref1 => 1,
            EcReference::Ref2 => 2,
            EcReference::GLink => 3,
        }
    }

    /// Map a wire code back; unrecognized codes fall back to
    /// [`EcReference::Ref1`].
    pub fn from_code(code: u8) -> Self {
        match code {
            2 => EcReference::Ref2,
            3 => EcReference::GLink,
            _ => EcReference::Ref1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---------------------------------------------------------------
    // Channel rendering
    // ---------------------------------------------------------------

    #[test]
    fn channel_number_displays_as_digits() {
        assert_eq!(Channel::Number(1).to_string(), "1");
        assert_eq!(Channel::Number(25).to_string(), "25");
    }

    #[test]
    fn channel_letter_displays_as_letter() {
        assert_eq!(Channel::Letter('A').to_string(), "A");
        assert_eq!(Channel::Letter('D').to_string(), "D");
    }

    #[test]
    fn channel_wildcard_displays_as_star() {
        assert_eq!(Channel::Wildcard.to_string(), "*");
    }

    #[test]
    fn channel_type_letters() {
        assert_eq!(ChannelType::Input.to_string(), "I");
        assert_eq!(ChannelType::Output.to_string(), "O");
        assert_eq!(ChannelType::Subbus.to_string(), "S");
    }

    #[test]
    fn meter_source_letters() {
        assert_eq!(MeterSource::Input.to_string(), "I");
        assert_eq!(MeterSource::Output.to_string(), "O");
        assert_eq!(MeterSource::AdaptiveAmbient.to_string(), "A");
    }

    #[test]
    fn eq_band_letters() {
        assert_eq!(EqBand::High.to_string(), "H");
        assert_eq!(EqBand::Mid.to_string(), "M");
        assert_eq!(EqBand::Low.to_string(), "L");
    }

    // ---------------------------------------------------------------
    // Baud rate mapping
    // ---------------------------------------------------------------

    #[test]
    fn baud_rate_codes() {
        assert_eq!(BaudRate::Baud9600.code(), 1);
        assert_eq!(BaudRate::Baud19200.code(), 2);
        assert_eq!(BaudRate::Baud38400.code(), 3);
    }

    #[test]
    fn baud_rate_from_bps_known() {
        assert_eq!(BaudRate::from_bps(9600), BaudRate::Baud9600);
        assert_eq!(BaudRate::from_bps(19_200), BaudRate::Baud19200);
        assert_eq!(BaudRate::from_bps(38_400), BaudRate::Baud38400);
    }

    #[test]
    fn baud_rate_from_bps_unrecognized_falls_back_to_9600() {
        assert_eq!(BaudRate::from_bps(115_200), BaudRate::Baud9600);
        assert_eq!(BaudRate::from_bps(4800), BaudRate::Baud9600);
        assert_eq!(BaudRate::from_bps(0), BaudRate::Baud9600);
    }

    // ---------------------------------------------------------------
    // Enumerated control fallbacks
    // ---------------------------------------------------------------

    #[test]
    fn decay_rate_codes_round_trip() {
        for rate in [DecayRate::Slow, DecayRate::Medium, DecayRate::Fast] {
            assert_eq!(DecayRate::from_code(rate.code()), rate);
        }
    }

    #[test]
    fn decay_rate_unrecognized_defaults_to_medium() {
        assert_eq!(DecayRate::from_code(0), DecayRate::Medium);
        assert_eq!(DecayRate::from_code(9), DecayRate::Medium);
    }

    #[test]
    fn gating_mode_codes_round_trip() {
        for mode in [
            GatingMode::Auto,
            GatingMode::ManualOn,
            GatingMode::ManualOff,
            GatingMode::OverrideOn,
            GatingMode::OverrideOff,
        ] {
            assert_eq!(GatingMode::from_code(mode.code()), mode);
        }
    }

    #[test]
    fn gating_mode_unrecognized_defaults_to_auto() {
        assert_eq!(GatingMode::from_code(0), GatingMode::Auto);
        assert_eq!(GatingMode::from_code(6), GatingMode::Auto);
    }

    #[test]
    fn master_mode_codes_round_trip() {
        for mode in [
            MasterMode::MasterSingle,
            MasterMode::DualMixer,
            MasterMode::Slave,
            MasterMode::MasterLinked,
        ] {
            assert_eq!(MasterMode::from_code(mode.code()), mode);
        }
    }

    #[test]
    fn master_mode_unrecognized_defaults_to_master_single() {
        assert_eq!(MasterMode::from_code(0), MasterMode::MasterSingle);
        assert_eq!(MasterMode::from_code(5), MasterMode::MasterSingle);
    }

    #[test]
    fn last_mic_mode_codes_round_trip() {
        for mode in [LastMicMode::Off, LastMicMode::MicOne, LastMicMode::LastOn] {
            assert_eq!(LastMicMode::from_code(mode.code()), mode);
        }
    }

    #[test]
    fn nlp_mode_codes_round_trip() {
        for mode in [
            NlpMode::Off,
            NlpMode::Soft,
            NlpMode::Medium,
            NlpMode::Aggressive,
        ] {
            assert_eq!(NlpMode::from_code(mode.code()), mode);
        }
    }

    #[test]
    fn mic_input_gain_codes_round_trip() {
        for gain in [
            MicInputGain::Db55,
            MicInputGain::Db25,
            MicInputGain::LineLevel,
        ] {
            assert_eq!(MicInputGain::from_code(gain.code()), gain);
        }
    }

    #[test]
    fn ec_reference_codes_round_trip() {
        for r in [EcReference::Ref1, EcReference::Ref2, EcReference::GLink] {
            assert_eq!(EcReference::from_code(r.code()), r);
        }
    }
}
