//! Core types used throughout mixlib.

use std::fmt;

/// Address of one mixer unit on the shared serial line.
///
/// Up to eight units can be daisy-chained on a single link; each is
/// identified by a unit code in `0..=7`. The unit-type digit that
/// accompanies the code on the wire is a protocol-family constant and is
/// owned by the protocol crate, so only the code varies here.
///
/// Constructed per call and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitCode(u8);

impl UnitCode {
    /// Create a `UnitCode` from a raw code.
    ///
    /// Valid codes are `0..=7`; passing an out-of-range code is a caller
    /// programming error and will produce a frame the device rejects.
    pub const fn new(code: u8) -> Self {
        UnitCode(code)
    }

    /// Return the raw numeric code of this unit.
    pub fn code(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for UnitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for UnitCode {
    fn from(code: u8) -> Self {
        UnitCode(code)
    }
}
