//! Error types for mixlib.
//!
//! All fallible operations across the library return [`Result<T>`], which
//! uses [`Error`] as the error type. Transport-layer, protocol-layer, and
//! configuration errors are all captured here.
//!
//! Note that frame decoding and reply dispatch deliberately do *not* use
//! this type: a garbled or foreign frame is dropped with a diagnostic, not
//! surfaced as an error, so that line noise can never fail a caller.

/// The error type for all mixlib operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A transport-level error (serial port open/read/write).
    #[error("transport error: {0}")]
    Transport(String),

    /// A protocol-level error (a command the engine could not build or a
    /// collaborator contract violation).
    #[error("protocol error: {0}")]
    Protocol(String),

    /// A configuration value could not be loaded or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Timed out waiting for transport data.
    ///
    /// Only ever produced by a [`Transport`](crate::transport::Transport)
    /// `receive` call. The protocol engine itself never waits on a
    /// counterpart reply, so this never escapes the reader loop.
    #[error("timeout waiting for data")]
    Timeout,

    /// No connection to the mixer has been established.
    #[error("not connected")]
    NotConnected,

    /// The connection to the mixer was lost unexpectedly.
    #[error("connection lost")]
    ConnectionLost,

    /// An underlying I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience `Result` alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_transport() {
        let e = Error::Transport("port busy".into());
        assert_eq!(e.to_string(), "transport error: port busy");
    }

    #[test]
    fn error_display_config() {
        let e = Error::Config("bad baud rate".into());
        assert_eq!(e.to_string(), "config error: bad baud rate");
    }

    #[test]
    fn error_display_not_connected() {
        assert_eq!(Error::NotConnected.to_string(), "not connected");
    }

    #[test]
    fn error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe broken");
        let e: Error = io_err.into();
        assert!(matches!(e, Error::Io(_)));
        assert!(e.to_string().contains("pipe broken"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<Error>();
        assert_sync::<Error>();
    }

    #[test]
    fn error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<Error>();
    }
}
