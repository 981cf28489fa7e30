//! Function loader
//!
//! A minimal host process for a single pluggable handler: it listens on
//! one TCP port and routes every HTTP request one of three ways, either
//! the `/health` liveness probe, the `/kill` remote stop, or the
//! handler's `trigger` operation.
//!
//! The handler capability is resolved once at startup from a path-like
//! reference and never reloaded. Exit codes: `1` startup failure, `2`
//! deliberate `/kill`, `0` only via external signal.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
