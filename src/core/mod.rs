//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the toolbox
//! server, including error handling, configuration, path security, the
//! server handler and transport layer abstractions.

pub mod config;
pub mod error;
pub mod security;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use security::{PathSecurityError, validate_path};
pub use server::ToolboxServer;
pub use transport::{TransportConfig, TransportService};
