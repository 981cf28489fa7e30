//! Startup error taxonomy and process exit codes
//!
//! Every failure before the listener starts accepting connections is a
//! `StartupError` and maps to [`EXIT_STARTUP_FAILURE`]. The remote-kill
//! switch is not an error: it is a deliberate control action with its own
//! fixed exit code, [`EXIT_KILLED`].

use thiserror::Error;

/// Exit code for startup failures (bad arguments, unresolvable handler,
/// bind failure). The process exits before accepting any connection.
pub const EXIT_STARTUP_FAILURE: i32 = 1;

/// Exit code for a deliberate external stop via the `/kill` endpoint.
/// Stable and documented; operators key process monitoring off it.
pub const EXIT_KILLED: i32 = 2;

/// Errors that prevent the loader from reaching the listening state.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid listen port '{0}': expected an integer between 0 and 65535")]
    InvalidPort(String),

    #[error("no handler reference given: pass it as the second argument or set handler.name")]
    MissingHandler,

    #[error("cannot resolve handler '{0}': no such handler is registered")]
    UnknownHandler(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid listen address: {0}")]
    Address(String),

    #[error("failed to initialize logger: {0}")]
    Logger(std::io::Error),

    #[error("failed to build async runtime: {0}")]
    Runtime(std::io::Error),

    #[error("failed to bind listener: {0}")]
    Bind(std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_and_nonzero() {
        assert_ne!(EXIT_STARTUP_FAILURE, 0);
        assert_ne!(EXIT_KILLED, 0);
        assert_ne!(EXIT_STARTUP_FAILURE, EXIT_KILLED);
    }

    #[test]
    fn error_messages_name_the_offending_input() {
        let err = StartupError::InvalidPort("http".to_string());
        assert!(err.to_string().contains("http"));

        let err = StartupError::UnknownHandler("functions/x.js".to_string());
        assert!(err.to_string().contains("functions/x.js"));
    }
}
