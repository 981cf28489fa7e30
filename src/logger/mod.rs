//! Logger module
//!
//! Provides logging utilities for the loader:
//! - Process lifecycle logging (startup, kill, signals)
//! - Access logging with multiple formats
//! - Error and warning logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::{http_version_label, AccessLogEntry};

use crate::config::Config;
use hyper::{Method, Uri, Version};
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config, handler_name: &str) {
    write_info("======================================");
    write_info("Function loader started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Loaded handler: {handler_name}"));
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info(&format!(
        "Control endpoints: {} {}",
        config.control.health_path, config.control.kill_path
    ));
    write_info("======================================\n");
}

pub fn log_handler_resolved(reference: &str, name: &str) {
    write_info(&format!("[Handler] Resolved '{reference}' -> {name}"));
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    write_info(&format!("[Request] {method} {uri} {version:?}"));
}

pub fn log_headers_count(count: usize, show: bool) {
    if show {
        write_info(&format!("[Headers] Count: {count}"));
    }
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}

/// The observability record for a requested shutdown, written just before
/// the process terminates with the kill exit code
pub fn log_kill_requested() {
    write_info("[Kill] The process is stopped as requested");
}

pub fn log_signal_exit(signal: &str) {
    write_info(&format!("[Signal] {signal} received, exiting"));
}
