//! Handler capability module
//!
//! A handler is the single pluggable unit of business logic the loader
//! carries. It is resolved once at startup from a path-like reference and
//! invoked for every request that is not a control endpoint.

mod builtin;
mod registry;

pub use builtin::{EchoHandler, HelloHandler};
pub use registry::resolve;

use async_trait::async_trait;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};

/// Request passed to a handler: headers plus the fully aggregated body
pub type HandlerRequest = Request<Bytes>;

/// Response a handler produces; the loader forwards it untouched
pub type HandlerResponse = Response<Full<Bytes>>;

/// The one operation a handler must expose
///
/// `trigger` receives the inbound request and produces the response; the
/// loader does not inspect or validate what the handler wrote. There is
/// no error boundary here: a panicking handler tears down the connection
/// task it runs on.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Registry name of this handler
    fn name(&self) -> &'static str;

    /// Handle one request
    async fn trigger(&self, req: HandlerRequest) -> HandlerResponse;
}
