//! AP800 text-protocol encoder/decoder.
//!
//! The AP800 speaks a carriage-return-terminated ASCII protocol over a
//! point-to-point serial link. Commands and replies share one grammar:
//! a device identifier anchored by `#`, a command mnemonic, and
//! space-separated argument tokens.
//!
//! # Command format
//!
//! ```text
//! #<unitType><unitCode> <MNEMONIC>[ <arg>]*\r
//! ```
//!
//! - `unitType`: single digit identifying the device family; always `1`
//!   for the AP800.
//! - `unitCode`: single digit selecting one of up to eight daisy-chained
//!   units.
//! - `MNEMONIC`: fixed, case-sensitive command name (e.g. `GAIN`, `MUTE`).
//! - Arguments are numerals, single letters, or the `*` wildcard; no
//!   escaping is needed or performed. Boolean flags render as `1`/`0`,
//!   and the toggle state renders as literal `2` where supported.
//! - Terminator: a single carriage return (0x0D).
//!
//! Query (request) forms omit the trailing value token entirely -- the
//! device's parser is positional, so an empty token is not equivalent.
//!
//! # Reply format
//!
//! Replies use the same grammar, without the terminator once the transport
//! has delimited the frame. A reply may be preceded by line noise or the
//! tail of a previous frame; the decoder anchors on the first `#` and
//! discards everything before it. Replies are not length-prefixed or
//! checksummed, so the sentinel is the only reliable frame boundary.

use bytes::{BufMut, BytesMut};
use mixlib_core::UnitCode;

/// Frame terminator byte (carriage return).
pub const TERMINATOR: u8 = b'\r';

/// Unit-type digit identifying the AP800 family on the wire.
pub const UNIT_TYPE_DIGIT: char = '1';

/// Every mnemonic in the AP800 command set.
///
/// Used to distinguish recognized-but-unhandled replies from truly unknown
/// ones during dispatch classification.
pub const MNEMONICS: &[&str] = &[
    "AAMB", "AGC", "AMBLVL", "BAUD", "CHAIRO", "DECAY", "DFLTM", "EC", "ERL", "ERLE", "EQ",
    "FLOW", "FMP", "FPP", "GAIN", "GATE", "GMODE", "GRATIO", "HOLD", "LFP", "LMO", "LVL",
    "MASTER", "MDMODE", "MEQ", "MHP", "MINIT", "MLINE", "MMAX", "MPASS", "MREF", "MTRX", "MUTE",
    "NLP", "NOM", "OFFA", "PAA", "PCMD", "PEVNT", "PP", "PRESET", "REFSEL", "TOUT", "UID", "VER",
];

/// Semantic classification of a decoded reply.
///
/// The mnemonic-string-to-variant mapping happens exactly once, at the
/// decode boundary, so "which replies are actually handled" is a single
/// reviewable list rather than an open-ended string switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    /// `MMAX` -- maximum active microphones report.
    MaxMics,
    /// `MUTE` -- channel mute state report.
    Mute,
    /// `ERROR` -- the unit rejected something it received.
    DeviceError,
    /// A recognized AP800 mnemonic with no registered handler.
    Ignored,
    /// A mnemonic outside the AP800 command set.
    Unknown,
}

impl ReplyKind {
    /// Classify a reply mnemonic. Matching is exact and case-sensitive.
    pub fn from_mnemonic(mnemonic: &str) -> ReplyKind {
        match mnemonic {
            "MMAX" => ReplyKind::MaxMics,
            "MUTE" => ReplyKind::Mute,
            "ERROR" => ReplyKind::DeviceError,
            m if MNEMONICS.contains(&m) => ReplyKind::Ignored,
            _ => ReplyKind::Unknown,
        }
    }
}

/// A decoded reply frame.
///
/// Produced only by [`decode_reply`]; immutable once parsed. The argument
/// tokens are consumed left-to-right by the handler registered for the
/// reply's kind -- each handler knows its own arity and tolerates or
/// rejects excess/missing tokens itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// The unit that sent the reply.
    pub unit: UnitCode,
    /// Semantic classification, assigned at decode time.
    pub kind: ReplyKind,
    /// The raw mnemonic, kept for diagnostics.
    pub mnemonic: String,
    /// Remaining tokens after the mnemonic is consumed.
    pub args: Vec<String>,
}

/// Result of attempting to decode one delimited reply frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// A well-formed frame from an AP800-family unit.
    Reply(Reply),

    /// A well-anchored frame whose unit-type digit belongs to a different
    /// device family sharing the line. Dropped silently upstream.
    ForeignFamily {
        /// The unit-type digit that was found instead of `1`.
        unit_type: char,
    },

    /// No `#` sentinel (or nothing parseable after it) -- the frame cannot
    /// be synchronized and is dropped with a diagnostic.
    NoSync,
}

/// Encode a command into wire bytes ready for transmission.
///
/// Renders `#1<unit> <mnemonic>[ <arg>]*\r`. Arguments are joined with a
/// single space; request forms pass an empty `args` slice and get no
/// trailing separator.
///
/// # Example
///
/// ```
/// use mixlib_ap800::protocol::encode_command;
/// use mixlib_core::UnitCode;
///
/// let cmd = encode_command(UnitCode::new(0), "HOLD", &["100"]);
/// assert_eq!(cmd, b"#10 HOLD 100\r");
///
/// let query = encode_command(UnitCode::new(3), "MMAX", &[]);
/// assert_eq!(query, b"#13 MMAX\r");
/// ```
pub fn encode_command(unit: UnitCode, mnemonic: &str, args: &[&str]) -> Vec<u8> {
    let args_len: usize = args.iter().map(|a| a.len() + 1).sum();
    let mut buf = BytesMut::with_capacity(4 + mnemonic.len() + args_len + 1);
    buf.put_u8(b'#');
    buf.put_u8(UNIT_TYPE_DIGIT as u8);
    buf.put_slice(unit.to_string().as_bytes());
    buf.put_u8(b' ');
    buf.put_slice(mnemonic.as_bytes());
    for arg in args {
        buf.put_u8(b' ');
        buf.put_slice(arg.as_bytes());
    }
    buf.put_u8(TERMINATOR);
    buf.to_vec()
}

/// Attempt to decode one delimited reply frame.
///
/// The transport boundary has already applied the carriage-return
/// delimiter; `raw` is one frame's bytes, possibly preceded by noise.
///
/// Algorithm:
/// 1. Scan for the first `#`; everything before it is discarded. No `#`
///    means [`DecodeOutcome::NoSync`].
/// 2. Split the remainder on spaces into tokens (empty tokens from
///    repeated separators are skipped).
/// 3. The first token is the 3-character device identifier
///    `#` + unitType + unitCode. A non-`1` unit type yields
///    [`DecodeOutcome::ForeignFamily`]; a malformed identifier or a frame
///    with no mnemonic token yields [`DecodeOutcome::NoSync`].
/// 4. The second token is the mnemonic; the rest become the reply's
///    arguments.
///
/// # Example
///
/// ```
/// use mixlib_ap800::protocol::{decode_reply, DecodeOutcome};
///
/// match decode_reply(b"#12 MUTE 3 I 1") {
///     DecodeOutcome::Reply(reply) => {
///         assert_eq!(reply.unit.code(), 2);
///         assert_eq!(reply.mnemonic, "MUTE");
///         assert_eq!(reply.args, vec!["3", "I", "1"]);
///     }
///     other => panic!("expected Reply, got {other:?}"),
/// }
/// ```
pub fn decode_reply(raw: &[u8]) -> DecodeOutcome {
    // Anchor on the sentinel; leading noise (a partial previous frame,
    // line garbage) is discarded rather than failing the frame.
    let start = match raw.iter().position(|&b| b == b'#') {
        Some(pos) => pos,
        None => return DecodeOutcome::NoSync,
    };

    let body = match std::str::from_utf8(&raw[start..]) {
        Ok(s) => s,
        Err(_) => return DecodeOutcome::NoSync,
    };

    let mut tokens = body.split(' ').filter(|t| !t.is_empty());

    let device_id = match tokens.next() {
        Some(id) => id,
        None => return DecodeOutcome::NoSync,
    };

    let mut id_chars = device_id.chars();
    // First char is the '#' we anchored on.
    let _hash = id_chars.next();
    let unit_type = match id_chars.next() {
        Some(c) => c,
        None => return DecodeOutcome::NoSync,
    };
    if unit_type != UNIT_TYPE_DIGIT {
        return DecodeOutcome::ForeignFamily { unit_type };
    }
    let unit_code = match id_chars.next() {
        Some(c) if c.is_ascii_digit() => c as u8 - b'0',
        _ => return DecodeOutcome::NoSync,
    };

    let mnemonic = match tokens.next() {
        Some(m) => m.to_string(),
        None => return DecodeOutcome::NoSync,
    };

    let args: Vec<String> = tokens.map(str::to_string).collect();
    let kind = ReplyKind::from_mnemonic(&mnemonic);

    DecodeOutcome::Reply(Reply {
        unit: UnitCode::new(unit_code),
        kind,
        mnemonic,
        args,
    })
}

/// Translate a device-reported error code into a human-readable
/// description.
///
/// The unit reports six error conditions; this table exists for
/// diagnostic surfacing only and triggers no corrective action.
pub fn describe_error(code: u8) -> &'static str {
    match code {
        1 => "The address is not valid/out of range or an invalid character",
        2 => "Could not extract a command from the string received",
        3 => "Serial overrun",
        4 => "N/A - reserved for later use",
        5 => "Invalid parameter",
        6 => "Unrecognized command",
        _ => "Unknown error - no description found",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---------------------------------------------------------------
    // Command encoding
    // ---------------------------------------------------------------

    #[test]
    fn encode_set_with_one_arg() {
        let cmd = encode_command(UnitCode::new(0), "HOLD", &["100"]);
        assert_eq!(cmd, b"#10 HOLD 100\r");
    }

    #[test]
    fn encode_set_with_three_args() {
        let cmd = encode_command(UnitCode::new(2), "MUTE", &["3", "I", "1"]);
        assert_eq!(cmd, b"#12 MUTE 3 I 1\r");
    }

    #[test]
    fn encode_request_has_no_trailing_separator() {
        let cmd = encode_command(UnitCode::new(0), "AMBLVL", &[]);
        assert_eq!(cmd, b"#10 AMBLVL\r");
    }

    #[test]
    fn encode_uses_unit_code_digit() {
        let cmd = encode_command(UnitCode::new(7), "UID", &[]);
        assert_eq!(cmd, b"#17 UID\r");
    }

    #[test]
    fn encode_wildcard_channel() {
        let cmd = encode_command(UnitCode::new(0), "AGC", &["*", "1"]);
        assert_eq!(cmd, b"#10 AGC * 1\r");
    }

    // ---------------------------------------------------------------
    // Reply decoding -- valid frames
    // ---------------------------------------------------------------

    #[test]
    fn decode_mute_reply() {
        match decode_reply(b"#12 MUTE 3 I 1") {
            DecodeOutcome::Reply(reply) => {
                assert_eq!(reply.unit.code(), 2);
                assert_eq!(reply.kind, ReplyKind::Mute);
                assert_eq!(reply.mnemonic, "MUTE");
                assert_eq!(reply.args, vec!["3", "I", "1"]);
            }
            other => panic!("expected Reply, got {other:?}"),
        }
    }

    #[test]
    fn decode_max_mics_reply() {
        match decode_reply(b"#10 MMAX 4") {
            DecodeOutcome::Reply(reply) => {
                assert_eq!(reply.unit.code(), 0);
                assert_eq!(reply.kind, ReplyKind::MaxMics);
                assert_eq!(reply.args, vec!["4"]);
            }
            other => panic!("expected Reply, got {other:?}"),
        }
    }

    #[test]
    fn decode_reply_with_no_args() {
        match decode_reply(b"#15 GATE") {
            DecodeOutcome::Reply(reply) => {
                assert_eq!(reply.unit.code(), 5);
                assert_eq!(reply.kind, ReplyKind::Ignored);
                assert_eq!(reply.mnemonic, "GATE");
                assert!(reply.args.is_empty());
            }
            other => panic!("expected Reply, got {other:?}"),
        }
    }

    #[test]
    fn decode_discards_leading_noise() {
        let noisy = decode_reply(b"garbage#12 MUTE 1 I 1");
        let clean = decode_reply(b"#12 MUTE 1 I 1");
        assert_eq!(noisy, clean);
        assert!(matches!(noisy, DecodeOutcome::Reply(_)));
    }

    #[test]
    fn decode_tolerates_repeated_separators() {
        match decode_reply(b"#10  MMAX  4") {
            DecodeOutcome::Reply(reply) => {
                assert_eq!(reply.mnemonic, "MMAX");
                assert_eq!(reply.args, vec!["4"]);
            }
            other => panic!("expected Reply, got {other:?}"),
        }
    }

    // ---------------------------------------------------------------
    // Reply decoding -- rejected frames
    // ---------------------------------------------------------------

    #[test]
    fn decode_without_sentinel_is_no_sync() {
        assert_eq!(decode_reply(b"12 MUTE 3 I 1"), DecodeOutcome::NoSync);
        assert_eq!(decode_reply(b""), DecodeOutcome::NoSync);
        assert_eq!(decode_reply(b"line noise only"), DecodeOutcome::NoSync);
    }

    #[test]
    fn decode_foreign_family_is_rejected() {
        match decode_reply(b"#32 MUTE 3 I 1") {
            DecodeOutcome::ForeignFamily { unit_type } => assert_eq!(unit_type, '3'),
            other => panic!("expected ForeignFamily, got {other:?}"),
        }
    }

    #[test]
    fn decode_truncated_device_id_is_no_sync() {
        assert_eq!(decode_reply(b"#"), DecodeOutcome::NoSync);
        assert_eq!(decode_reply(b"#1"), DecodeOutcome::NoSync);
    }

    #[test]
    fn decode_non_digit_unit_code_is_no_sync() {
        assert_eq!(decode_reply(b"#1X MUTE 3 I 1"), DecodeOutcome::NoSync);
    }

    #[test]
    fn decode_missing_mnemonic_is_no_sync() {
        assert_eq!(decode_reply(b"#12"), DecodeOutcome::NoSync);
        assert_eq!(decode_reply(b"#12 "), DecodeOutcome::NoSync);
    }

    // ---------------------------------------------------------------
    // Reply classification
    // ---------------------------------------------------------------

    #[test]
    fn classify_handled_mnemonics() {
        assert_eq!(ReplyKind::from_mnemonic("MMAX"), ReplyKind::MaxMics);
        assert_eq!(ReplyKind::from_mnemonic("MUTE"), ReplyKind::Mute);
        assert_eq!(ReplyKind::from_mnemonic("ERROR"), ReplyKind::DeviceError);
    }

    #[test]
    fn classify_recognized_but_unhandled() {
        for m in ["AAMB", "GAIN", "PRESET", "UID", "VER"] {
            assert_eq!(ReplyKind::from_mnemonic(m), ReplyKind::Ignored, "{m}");
        }
    }

    #[test]
    fn classify_unknown() {
        assert_eq!(ReplyKind::from_mnemonic("BOGUS"), ReplyKind::Unknown);
        assert_eq!(ReplyKind::from_mnemonic(""), ReplyKind::Unknown);
    }

    #[test]
    fn classification_is_case_sensitive() {
        assert_eq!(ReplyKind::from_mnemonic("mute"), ReplyKind::Unknown);
        assert_eq!(ReplyKind::from_mnemonic("Mmax"), ReplyKind::Unknown);
    }

    #[test]
    fn mnemonic_table_is_complete() {
        assert_eq!(MNEMONICS.len(), 45);
        // Handled mnemonics are also part of the command set.
        assert!(MNEMONICS.contains(&"MMAX"));
        assert!(MNEMONICS.contains(&"MUTE"));
    }

    // ---------------------------------------------------------------
    // Round-trip: encode then decode
    // ---------------------------------------------------------------

    #[test]
    fn round_trip_set_command() {
        let cmd = encode_command(UnitCode::new(4), "GMODE", &["2", "1"]);
        // Strip the terminator, as the transport does before decode.
        match decode_reply(&cmd[..cmd.len() - 1]) {
            DecodeOutcome::Reply(reply) => {
                assert_eq!(reply.unit.code(), 4);
                assert_eq!(reply.mnemonic, "GMODE");
                assert_eq!(reply.args, vec!["2", "1"]);
            }
            other => panic!("expected Reply, got {other:?}"),
        }
    }

    #[test]
    fn round_trip_request_command() {
        let cmd = encode_command(UnitCode::new(0), "VER", &[]);
        match decode_reply(&cmd[..cmd.len() - 1]) {
            DecodeOutcome::Reply(reply) => {
                assert_eq!(reply.unit.code(), 0);
                assert_eq!(reply.mnemonic, "VER");
                assert!(reply.args.is_empty());
            }
            other => panic!("expected Reply, got {other:?}"),
        }
    }

    // ---------------------------------------------------------------
    // Error description table
    // ---------------------------------------------------------------

    #[test]
    fn error_descriptions_cover_all_codes() {
        for code in 1..=6 {
            assert_ne!(
                describe_error(code),
                "Unknown error - no description found",
                "code {code} should have a description"
            );
        }
    }

    #[test]
    fn error_description_unknown_code() {
        assert_eq!(describe_error(0), "Unknown error - no description found");
        assert_eq!(describe_error(7), "Unknown error - no description found");
    }

    #[test]
    fn error_description_serial_overrun() {
        assert_eq!(describe_error(3), "Serial overrun");
    }
}
