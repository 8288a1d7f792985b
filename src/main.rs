use servedir::config::{AppState, Config};
use servedir::{logger, server};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = Config::load()?;

    // A single positional argument overrides the configured root.
    if let Some(root) = std::env::args().nth(1) {
        cfg.server.root = root;
    }

    logger::init(&cfg)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::bind_listener(addr)?;
    let state = Arc::new(AppState::new(cfg)?);

    logger::log_server_start(&addr, &state);
    server::run(listener, state).await;
    Ok(())
}
