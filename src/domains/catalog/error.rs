//! Catalog-specific error types.

use thiserror::Error;

use super::model::{CategoryId, ToolId};

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while loading or querying the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No category has the requested id.
    #[error("Category not found")]
    CategoryNotFound(CategoryId),

    /// No tool has the requested id.
    #[error("Tool not found")]
    ToolNotFound(ToolId),

    /// The dataset violates a catalog invariant.
    #[error("Invalid catalog dataset: {0}")]
    InvalidDataset(String),

    /// Reading a dataset file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A dataset file is not valid JSON for the catalog schema.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    /// Create a new "invalid dataset" error.
    pub fn invalid_dataset(msg: impl Into<String>) -> Self {
        Self::InvalidDataset(msg.into())
    }

    /// Whether this error means a requested record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CategoryNotFound(_) | Self::ToolNotFound(_))
    }
}
