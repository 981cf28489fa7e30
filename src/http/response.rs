//! HTTP response building module
//!
//! Builders for the loader's own responses. Handler responses are never
//! routed through here; whatever a handler writes is forwarded untouched.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build the liveness probe response: 200, empty body, no side effects
pub fn build_health_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Length", 0)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("health", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build the kill acknowledgement
///
/// The process is already on its way down when this is produced, so
/// delivery is best effort: the socket may close before the bytes flush.
pub fn build_kill_response() -> Response<Full<Bytes>> {
    build_text_response(202, "shutting down\n".to_string())
}

/// Build a 400 response for requests whose body could not be read
pub fn build_bad_request_response() -> Response<Full<Bytes>> {
    build_text_response(400, "400 Bad Request".to_string())
}

/// Build a plain-text response with the given status
pub fn build_text_response(status: u16, body: String) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Content-Length", body.len())
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("text", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(kind: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {kind} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn health_response_is_200_with_empty_body() {
        let resp = build_health_response();
        assert_eq!(resp.status(), 200);
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }

    #[test]
    fn kill_response_is_accepted() {
        assert_eq!(build_kill_response().status(), 202);
    }

    #[tokio::test]
    async fn text_response_carries_status_and_body() {
        let resp = build_text_response(201, "ok".to_string());
        assert_eq!(resp.status(), 201);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "text/plain; charset=utf-8"
        );
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"ok");
    }
}
