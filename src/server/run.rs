// Accept loop module
// The loader's single server loop: accept connections until killed

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::AppState;
use crate::logger;

use super::connection::accept_connection;

/// Run the accept loop until the kill endpoint fires.
///
/// Accept errors are logged and the loop keeps serving; only the kill
/// signal ends it. Returning hands control back to `main`, which writes
/// the shutdown record and exits with the kill code. In-flight requests
/// are abandoned: no drain, no delivery guarantee for their responses.
pub async fn serve_until_kill(listener: TcpListener, state: Arc<AppState>) {
    let active_connections = Arc::new(AtomicUsize::new(0));
    let kill_signal = Arc::clone(&state.kill_signal);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = kill_signal.notified() => {
                return;
            }
        }
    }
}
