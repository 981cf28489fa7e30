// Signal handling module
//
// SIGTERM / SIGINT exit the process with code 0: the only way this
// process exits 0. The kill endpoint and startup failures each use their
// own nonzero codes.

use crate::logger;

/// Start the signal handler task (Unix)
#[cfg(unix)]
pub fn spawn_signal_handler() {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async {
        let Ok(mut sigterm) = signal(SignalKind::terminate()) else {
            logger::log_error("Failed to register SIGTERM handler");
            return;
        };
        let Ok(mut sigint) = signal(SignalKind::interrupt()) else {
            logger::log_error("Failed to register SIGINT handler");
            return;
        };

        tokio::select! {
            _ = sigterm.recv() => logger::log_signal_exit("SIGTERM"),
            _ = sigint.recv() => logger::log_signal_exit("SIGINT"),
        }
        std::process::exit(0);
    });
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn spawn_signal_handler() {
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            logger::log_signal_exit("Ctrl+C");
            std::process::exit(0);
        }
    });
}
