// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub handler: HandlerConfig,
    #[serde(default)]
    pub control: ControlConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Handler configuration
///
/// `name` is the path-like reference resolved once at startup. An empty
/// string means "not configured": startup fails unless the second
/// positional argument supplies one.
#[derive(Debug, Deserialize, Clone)]
pub struct HandlerConfig {
    pub name: String,
}

/// Control endpoint configuration
///
/// The two paths the loader interprets itself instead of forwarding to
/// the handler.
#[derive(Debug, Deserialize, Clone)]
pub struct ControlConfig {
    #[serde(default = "default_health_path")]
    pub health_path: String,
    #[serde(default = "default_kill_path")]
    pub kill_path: String,
}

fn default_health_path() -> String {
    "/health".to_string()
}

fn default_kill_path() -> String {
    "/kill".to_string()
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            health_path: default_health_path(),
            kill_path: default_kill_path(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, or json)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
    pub show_headers: bool,
}

fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                workers: None,
            },
            handler: HandlerConfig {
                name: String::new(),
            },
            control: ControlConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: true,
                access_log_format: default_access_log_format(),
                access_log_file: None,
                error_log_file: None,
                show_headers: false,
            },
            performance: PerformanceConfig {
                keep_alive_timeout: 75,
                read_timeout: 30,
                write_timeout: 30,
                max_connections: None,
            },
        }
    }
}
