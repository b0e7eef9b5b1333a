//! Resource-specific error types.

use thiserror::Error;

use crate::domains::catalog::CatalogError;

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No resource answers to this URI.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The resource URI is malformed.
    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    /// The catalog query behind the resource failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The query result could not be serialized.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }

    /// Create a new "invalid URI" error.
    pub fn invalid_uri(uri: impl Into<String>) -> Self {
        Self::InvalidUri(uri.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether the client asked for something that does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) | Self::InvalidUri(_) => true,
            Self::Catalog(e) => e.is_not_found(),
            Self::Internal(_) => false,
        }
    }
}
