//! Request dispatch module
//!
//! Every inbound request goes one of three ways, first match wins:
//! the health probe, the kill switch, or the loaded handler.
//!
//! The original loader evaluated these as independent, non-exclusive
//! rules (the handler fired even for health probes, and the response was
//! finalized twice). Here routing is exclusive: hyper's typed
//! request/response model cannot finalize a response twice, and the
//! observable contract is that control paths never reach the handler.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Request, Response};

use crate::config::AppState;
use crate::http;
use crate::logger;

/// Main entry point for HTTP request handling
///
/// Aggregates the request body, dispatches, and emits the access log
/// entry once the response is known.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let access_log = state.cached_access_log.load(Ordering::Relaxed);

    if access_log {
        logger::log_request(req.method(), req.uri(), req.version());
    }
    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    let mut entry = access_entry(&req, peer_addr);

    // Hand the handler a complete request: aggregate the body up front
    let (parts, body) = req.into_parts();
    let body = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_warning(&format!("Failed to read request body: {e}"));
            let response = http::build_bad_request_response();
            finish_entry(&mut entry, &response, started);
            if access_log {
                logger::log_access(&entry, &state.config.logging.access_log_format);
            }
            return Ok(response);
        }
    };

    let response = dispatch(Request::from_parts(parts, body), &state).await;

    finish_entry(&mut entry, &response, started);
    if access_log {
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route one request: health probe, kill switch, or handler delegation
///
/// The kill switch is unauthenticated: any caller who can reach the port
/// can stop the service. It only signals here; the server loop owns the
/// actual exit. The acknowledgement races against process termination
/// and is not guaranteed to reach the caller.
pub async fn dispatch(
    req: Request<Bytes>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    let path = req.uri().path();
    let control = &state.config.control;

    if path == control.health_path {
        return http::build_health_response();
    }

    if path == control.kill_path {
        state.kill_signal.notify_one();
        return http::build_kill_response();
    }

    // No error boundary: a panicking handler tears down this connection
    // task, matching the original's lack of any recovery policy
    state.handler.trigger(req).await
}

fn access_entry(
    req: &Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
) -> logger::AccessLogEntry {
    let mut entry = logger::AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = logger::http_version_label(req.version()).to_string();
    entry.referer = header_string(req, "referer");
    entry.user_agent = header_string(req, "user-agent");
    entry
}

fn finish_entry(
    entry: &mut logger::AccessLogEntry,
    response: &Response<Full<Bytes>>,
    started: Instant,
) {
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .headers()
        .get("Content-Length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
}

fn header_string(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}
