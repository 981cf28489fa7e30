//! End-to-end tests that spawn the real loader binary and observe it
//! from the outside: HTTP responses and process exit codes.

use std::process::{Child, Command, Stdio};
use std::time::Duration;

const BIN: &str = env!("CARGO_BIN_EXE_function-loader");

const EXIT_STARTUP_FAILURE: i32 = 1;
const EXIT_KILLED: i32 = 2;

/// Child process that is killed when a test panics before it exits
struct Loader(Child);

impl Drop for Loader {
    fn drop(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}

fn spawn_loader(args: &[&str]) -> Loader {
    Loader(
        Command::new(BIN)
            .args(args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("failed to spawn loader binary"),
    )
}

fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

/// Poll for process exit within the window; None means still running
fn wait_exit_blocking(child: &mut Child, window: Duration) -> Option<i32> {
    let deadline = std::time::Instant::now() + window;
    while std::time::Instant::now() < deadline {
        if let Ok(Some(status)) = child.try_wait() {
            return status.code();
        }
        std::thread::sleep(Duration::from_millis(25));
    }
    None
}

async fn wait_exit(child: &mut Child, window: Duration) -> Option<i32> {
    let deadline = tokio::time::Instant::now() + window;
    while tokio::time::Instant::now() < deadline {
        if let Ok(Some(status)) = child.try_wait() {
            return status.code();
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    None
}

async fn wait_ready(port: u16) {
    let url = format!("http://127.0.0.1:{port}/health");
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    loop {
        if let Ok(resp) = reqwest::get(&url).await {
            if resp.status() == 200 {
                return;
            }
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "loader did not become ready on port {port}"
        );
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}

#[tokio::test]
async fn health_delegation_and_kill() {
    let port = free_port();
    let port_arg = port.to_string();
    let mut loader = spawn_loader(&[&port_arg, "functions/public/echo.js"]);
    wait_ready(port).await;

    // Health probe: 200, empty body, any method
    let resp = reqwest::get(format!("http://127.0.0.1:{port}/health"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp.text().await.unwrap().is_empty());

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("http://127.0.0.1:{port}/health"))
        .body("ignored")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    // Any other path is delegated to the loaded handler
    let resp = reqwest::get(format!("http://127.0.0.1:{port}/anything"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();
    assert!(body.starts_with("GET /anything"), "unexpected body: {body}");

    // The probe left the process serving
    let resp = reqwest::get(format!("http://127.0.0.1:{port}/health"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    // Kill: the acknowledgement is best effort, only the exit code counts
    let _ = reqwest::get(format!("http://127.0.0.1:{port}/kill")).await;

    let code = wait_exit(&mut loader.0, Duration::from_secs(5)).await;
    assert_eq!(code, Some(EXIT_KILLED));
}

#[test]
fn invalid_port_fails_fast() {
    let mut loader = spawn_loader(&["eighty", "echo"]);
    let code = wait_exit_blocking(&mut loader.0, Duration::from_secs(5));
    assert_eq!(code, Some(EXIT_STARTUP_FAILURE));
}

#[test]
fn unresolvable_handler_fails_before_binding() {
    let port = free_port();
    let port_arg = port.to_string();
    let mut loader = spawn_loader(&[&port_arg, "functions/missing.js"]);

    let code = wait_exit_blocking(&mut loader.0, Duration::from_secs(5));
    assert_eq!(code, Some(EXIT_STARTUP_FAILURE));

    // No listener was ever bound
    let addr = format!("127.0.0.1:{port}").parse().unwrap();
    assert!(std::net::TcpStream::connect_timeout(&addr, Duration::from_millis(250)).is_err());
}

#[test]
fn missing_handler_reference_fails_fast() {
    let port = free_port();
    let port_arg = port.to_string();
    let mut loader = spawn_loader(&[&port_arg]);
    let code = wait_exit_blocking(&mut loader.0, Duration::from_secs(5));
    assert_eq!(code, Some(EXIT_STARTUP_FAILURE));
}
