// Configuration module entry point
// Layered loading: compiled defaults < config file < environment < argv

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, ControlConfig, HandlerConfig, LoggingConfig, PerformanceConfig, ServerConfig,
};

impl Config {
    /// Load configuration from the specified file path (without extension)
    /// The default config file is "loader.toml" when no path is specified
    ///
    /// Environment variables layer on top of the file: `LOADER_` prefix,
    /// `__` between section and key (`LOADER_LOGGING__ACCESS_LOG`), so
    /// keys that themselves contain underscores stay addressable.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("LOADER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("handler.name", "")?
            .set_default("control.health_path", "/health")?
            .set_default("control.kill_path", "/kill")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("logging.show_headers", false)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    /// Apply the positional process arguments on top of file/env layers
    ///
    /// argv[1] is the listen port, argv[2] the handler reference. Both are
    /// optional once the corresponding config keys are set; when present
    /// they win.
    pub fn apply_overrides(&mut self, port: Option<u16>, handler_ref: Option<String>) {
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(handler_ref) = handler_ref {
            self.handler.name = handler_ref;
        }
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
