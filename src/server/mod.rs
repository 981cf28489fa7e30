// Server module entry point
// Listener binding, connection handling, and the accept loop

mod connection;
mod listener;
mod run;
mod signal;

pub use listener::bind_listener;
pub use run::serve_until_kill;
pub use signal::spawn_signal_handler;
