//! Error types and handling for the toolbox server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and external dependencies.

use thiserror::Error;

/// A specialized Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the toolbox server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the catalog domain.
    #[error("Catalog error: {0}")]
    Catalog(#[from] crate::domains::catalog::CatalogError),

    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the resources domain.
    #[error("Resource error: {0}")]
    Resource(#[from] crate::domains::resources::ResourceError),

    /// Invalid widget input.
    #[error("Validation error: {0}")]
    Validation(#[from] crate::domains::widgets::ValidationError),

    /// Error raised by a transport.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::{CatalogError, ToolId};

    #[test]
    fn test_catalog_error_converts() {
        let err: Error = CatalogError::ToolNotFound(ToolId(99)).into();
        assert_eq!(err.to_string(), "Catalog error: Tool not found");
    }
}
