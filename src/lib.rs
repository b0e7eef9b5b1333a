//! Toolbox MCP Server Library
//!
//! This crate serves a categorized catalog of small utility tools over the
//! Model Context Protocol. Clients browse the catalog through a navigator
//! that keeps per-view loading state, and call the implemented tools
//! (calculators, converters, generators, simulated file conversions)
//! directly.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, path security, the server
//!   handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **catalog**: records, store and query service
//!   - **navigation**: routes and view coordination
//!   - **widgets**: tool widget logic
//!   - **tools**: MCP tools that can be executed by clients
//!   - **resources**: catalog data readable by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use toolbox_server::{Config, ToolboxServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = ToolboxServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result, ToolboxServer};
