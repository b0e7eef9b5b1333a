//! TCP transport implementation.
//!
//! Raw TCP sockets carrying line-delimited JSON-RPC. Every connection is an
//! independent MCP session over the same server, so all clients see the
//! same catalog usage counters and navigator.

use rmcp::ServiceExt;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tracing::{Instrument, info, info_span, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::ToolboxServer;

/// Pause after a failed accept before trying again.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// TCP transport handler.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Accept connections until Ctrl-C.
    pub async fn run(self, server: ToolboxServer) -> TransportResult<()> {
        let addr = self.address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {} (JSON-RPC over TCP)", addr);

        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                accepted = listener.accept() => match accepted {
                    Ok((stream, peer)) => {
                        let server = server.clone();
                        tokio::spawn(
                            serve_connection(server, stream)
                                .instrument(info_span!("tcp_client", %peer)),
                        );
                    }
                    Err(e) => {
                        warn!("Failed to accept connection: {}", e);
                        tokio::time::sleep(ACCEPT_BACKOFF).await;
                    }
                },
                _ = &mut shutdown => {
                    info!("Shutdown requested, no longer accepting connections");
                    return Ok(());
                }
            }
        }
    }
}

async fn serve_connection(server: ToolboxServer, stream: TcpStream) {
    info!("Accepted connection");

    if let Err(e) = stream.set_nodelay(true) {
        warn!("Failed to set TCP_NODELAY: {}", e);
    }

    let running = match server.serve(stream).await {
        Ok(running) => running,
        Err(e) => {
            warn!("MCP handshake failed: {}", e);
            return;
        }
    };

    match running.waiting().await {
        Ok(reason) => info!("Client disconnected: {:?}", reason),
        Err(e) => warn!("Session ended with error: {:?}", e),
    }
}
