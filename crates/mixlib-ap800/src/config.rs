//! Driver settings.
//!
//! Settings are loaded from a small TOML document and passed explicitly to
//! the [`Ap800Builder`](crate::builder::Ap800Builder) at connect time --
//! there is no ambient global configuration, and the reload policy is
//! simply "load again before reconnecting".
//!
//! ```toml
//! serial_port = "/dev/ttyUSB0"
//! baud_rate = 9600
//! log_level = 1
//! ```
//!
//! Serial framing is fixed at 8 data bits / 1 stop bit / no parity and is
//! deliberately not configurable; the hardware accepts nothing else.

use serde::Deserialize;
use std::path::Path;

use mixlib_core::error::{Error, Result};

use crate::types::BaudRate;

/// Log verbosity requested by the host.
///
/// Maps onto a `tracing` filter directive installed by the host's
/// subscriber; the engine itself always logs at the level appropriate to
/// each diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// 0 -- warnings and errors only.
    Silent,
    /// 1 -- connection and dispatch information.
    Info,
    /// 2 -- info plus raw frame traces.
    TraceFrames,
}

impl LogLevel {
    /// Map a numeric level from the settings file; values above 2 behave
    /// like 2.
    pub fn from_number(level: u8) -> Self {
        match level {
            0 => LogLevel::Silent,
            1 => LogLevel::Info,
            _ => LogLevel::TraceFrames,
        }
    }

    /// The `tracing` filter directive this level corresponds to.
    pub fn filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Silent => "warn",
            LogLevel::Info => "info",
            LogLevel::TraceFrames => "trace",
        }
    }
}

/// Connection settings for one mixer link.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Serial port path (e.g. `/dev/ttyUSB0` or `COM3`).
    pub serial_port: String,

    /// Baud rate in bits per second. One of 9600, 19200, 38400; anything
    /// else falls back to 9600.
    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,

    /// Log verbosity: 0 = silent, 1 = info, 2 = info + raw frame trace.
    #[serde(default)]
    pub log_level: u8,
}

fn default_baud_rate() -> u32 {
    9600
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read settings file {}: {e}", path.display()))
        })?;
        Self::parse(&text)
    }

    /// Parse settings from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(format!("invalid settings: {e}")))
    }

    /// The effective baud rate, with unsupported values already mapped to
    /// 9600.
    pub fn baud(&self) -> BaudRate {
        BaudRate::from_bps(self.baud_rate)
    }

    /// The effective log verbosity.
    pub fn log_level(&self) -> LogLevel {
        LogLevel::from_number(self.log_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_settings() {
        let settings = Settings::parse(
            r#"
            serial_port = "/dev/ttyUSB0"
            baud_rate = 38400
            log_level = 2
            "#,
        )
        .unwrap();
        assert_eq!(settings.serial_port, "/dev/ttyUSB0");
        assert_eq!(settings.baud(), BaudRate::Baud38400);
        assert_eq!(settings.log_level(), LogLevel::TraceFrames);
    }

    #[test]
    fn parse_defaults() {
        let settings = Settings::parse(r#"serial_port = "COM3""#).unwrap();
        assert_eq!(settings.baud(), BaudRate::Baud9600);
        assert_eq!(settings.log_level(), LogLevel::Silent);
    }

    #[test]
    fn invalid_baud_rate_falls_back_to_9600() {
        let settings = Settings::parse(
            r#"
            serial_port = "COM3"
            baud_rate = 115200
            "#,
        )
        .unwrap();
        assert_eq!(settings.baud(), BaudRate::Baud9600);
    }

    #[test]
    fn missing_serial_port_is_a_config_error() {
        let result = Settings::parse("baud_rate = 9600");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn log_level_mapping() {
        assert_eq!(LogLevel::from_number(0), LogLevel::Silent);
        assert_eq!(LogLevel::from_number(1), LogLevel::Info);
        assert_eq!(LogLevel::from_number(2), LogLevel::TraceFrames);
        assert_eq!(LogLevel::from_number(9), LogLevel::TraceFrames);
    }

    #[test]
    fn log_level_filter_directives() {
        assert_eq!(LogLevel::Silent.filter_directive(), "warn");
        assert_eq!(LogLevel::Info.filter_directive(), "info");
        assert_eq!(LogLevel::TraceFrames.filter_directive(), "trace");
    }
}
