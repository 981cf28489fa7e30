// Application state module
// Process-wide immutable state shared by every connection

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tokio::sync::Notify;

use crate::handler::Handler;

use super::types::Config;

/// Application state
///
/// Exactly one handler capability exists per process. It is resolved
/// before the listener binds and never swapped or reloaded, so every
/// request reads it without coordination.
pub struct AppState {
    pub config: Config,
    /// The loaded handler capability
    pub handler: Arc<dyn Handler>,
    /// Notified when a request hits the kill endpoint; the server loop
    /// waits on this and returns so the process can exit
    pub kill_signal: Arc<Notify>,

    // Cached config value for lock-free access on the request path
    pub cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: Config, handler: Arc<dyn Handler>) -> Self {
        let cached_access_log = AtomicBool::new(config.logging.access_log);
        Self {
            config,
            handler,
            kill_signal: Arc::new(Notify::new()),
            cached_access_log,
        }
    }
}
