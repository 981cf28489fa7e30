use std::process;
use std::sync::Arc;

use function_loader::config::{AppState, Config};
use function_loader::error::{StartupError, EXIT_KILLED, EXIT_STARTUP_FAILURE};
use function_loader::{handler, logger, server};

/// Usage: `function-loader [PORT] [HANDLER_REF]`
///
/// Both arguments are optional once `loader.toml` (or `LOADER_*`
/// environment variables) provide them; when present they override the
/// configured values.
fn main() {
    match run() {
        // The accept loop only returns when the kill endpoint fired
        Ok(()) => {
            logger::log_kill_requested();
            process::exit(EXIT_KILLED);
        }
        Err(e) => {
            logger::log_error(&e.to_string());
            process::exit(EXIT_STARTUP_FAILURE);
        }
    }
}

fn run() -> Result<(), StartupError> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let port = match args.first() {
        Some(raw) => Some(
            raw.parse::<u16>()
                .map_err(|_| StartupError::InvalidPort(raw.clone()))?,
        ),
        None => None,
    };
    let handler_ref = args.get(1).cloned();

    let mut cfg = Config::load_from("loader")?;
    cfg.apply_overrides(port, handler_ref);

    logger::init(&cfg).map_err(StartupError::Logger)?;

    // Resolve the handler capability before binding anything: a bad
    // reference must fail fast, with no socket ever bound
    let handler = handler::resolve(&cfg.handler.name)?;
    logger::log_handler_resolved(&cfg.handler.name, handler.name());

    let addr = cfg.get_socket_addr().map_err(StartupError::Address)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build().map_err(StartupError::Runtime)?;

    runtime.block_on(async move {
        let listener = server::bind_listener(addr).map_err(StartupError::Bind)?;
        let bound_addr = listener.local_addr().unwrap_or(addr);

        let state = Arc::new(AppState::new(cfg, handler));
        logger::log_server_start(&bound_addr, &state.config, state.handler.name());

        server::spawn_signal_handler();
        server::serve_until_kill(listener, state).await;
        Ok(())
    })
}
