// Server module entry point
// Listener binding, accept loop, and per-connection serving

pub mod connection;
pub mod listener;

pub use listener::bind_listener;

use crate::config::AppState;
use crate::logger;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Accept connections until a shutdown signal arrives.
///
/// Accept failures are logged and the loop keeps going; one bad accept
/// must not take the server down.
pub async fn run(listener: TcpListener, state: Arc<AppState>) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::spawn_connection(stream, peer_addr, Arc::clone(&state));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = tokio::signal::ctrl_c() => {
                logger::log_shutdown();
                break;
            }
        }
    }
}
