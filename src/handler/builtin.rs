// Built-in handlers
// The compiled-in equivalents of the function scripts the original
// control plane shipped to its loaders

use async_trait::async_trait;

use crate::http;

use super::{Handler, HandlerRequest, HandlerResponse};

/// Echoes the request line and body back to the caller
///
/// Useful as a smoke-test function: the response proves exactly what the
/// loader delegated.
pub struct EchoHandler;

#[async_trait]
impl Handler for EchoHandler {
    fn name(&self) -> &'static str {
        "echo"
    }

    async fn trigger(&self, req: HandlerRequest) -> HandlerResponse {
        let mut body = format!("{} {}\n", req.method(), req.uri());
        if !req.body().is_empty() {
            body.push_str(&String::from_utf8_lossy(req.body()));
        }
        http::build_text_response(200, body)
    }
}

/// Replies with a fixed greeting regardless of the request
pub struct HelloHandler;

#[async_trait]
impl Handler for HelloHandler {
    fn name(&self) -> &'static str {
        "hello"
    }

    async fn trigger(&self, _req: HandlerRequest) -> HandlerResponse {
        http::build_text_response(200, "hello".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use hyper::body::Bytes;
    use hyper::Request;

    fn request(method: &str, path: &str, body: &str) -> HandlerRequest {
        Request::builder()
            .method(method)
            .uri(path)
            .body(Bytes::from(body.to_string()))
            .unwrap()
    }

    async fn body_string(resp: HandlerResponse) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn echo_reports_method_path_and_body() {
        let resp = EchoHandler
            .trigger(request("POST", "/anything", "payload"))
            .await;
        assert_eq!(resp.status(), 200);

        let body = body_string(resp).await;
        assert!(body.starts_with("POST /anything\n"));
        assert!(body.contains("payload"));
    }

    #[tokio::test]
    async fn echo_omits_empty_body() {
        let resp = EchoHandler.trigger(request("GET", "/x", "")).await;
        assert_eq!(body_string(resp).await, "GET /x\n");
    }

    #[tokio::test]
    async fn hello_is_fixed_output() {
        let resp = HelloHandler.trigger(request("GET", "/whatever", "")).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(body_string(resp).await, "hello");
    }
}
