//! Catalog browsing tools.
//!
//! These drive the shared navigator, so a client sees the same page and
//! loading state across calls.

pub mod navigate;
pub mod suggest;

pub use navigate::{NavigateParams, NavigateTool};
pub use suggest::{CatalogSuggestParams, CatalogSuggestTool};
