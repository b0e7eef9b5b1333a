//! Transport layer for the toolbox server.
//!
//! Each transport is compiled in by its cargo feature:
//! - `stdio` (default): MCP over stdin/stdout
//! - `tcp`: line-delimited JSON-RPC over raw TCP sockets (adds tokio/net)
//! - `http`: JSON-RPC over HTTP POST plus a health check (adds axum and tower)
//!
//! All of them drive the same [`ToolboxServer`](crate::core::ToolboxServer).

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
