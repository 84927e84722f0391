//! Device addressing and naming.
//!
//! A deterministic mapping from a unit code to the location label used for
//! that unit's entries in the host device store, plus builders for the
//! human-facing device names the projection handlers write to.
//!
//! The only invariant that matters here is injectivity over the unit code:
//! two physical units must never collide in the external device namespace.

use mixlib_core::UnitCode;

/// Location prefix shared by every device belonging to this driver.
const LOCATION_PREFIX: &str = "AP800";

/// Location label for one unit, e.g. `"AP800 ID#0"`.
pub fn location_label(unit: UnitCode) -> String {
    format!("{LOCATION_PREFIX} ID#{unit}")
}

/// Friendly name of the max-active-microphones device for a unit.
pub fn max_mics_device_name(unit: UnitCode) -> String {
    format!("{} Max Number of Microphones", location_label(unit))
}

/// Friendly name of the mute-status device for one microphone channel of
/// a unit.
pub fn mic_mute_device_name(unit: UnitCode, channel: u8) -> String {
    format!(
        "{} Microphone #{channel} Mute Status",
        location_label(unit)
    )
}
