//! Resources domain module.
//!
//! Resources expose the catalog to MCP clients as read-only JSON documents
//! under the `catalog://` scheme.
//!
//! ## Architecture
//!
//! - `definitions/` - Fixed resource definitions and URI parsing
//! - `registry.rs` - Central resource and template registration
//! - `service.rs` - Resource service for listing and reading

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::{CatalogUri, ResourceDefinition};
pub use error::ResourceError;
pub use registry::{get_all_resource_templates, get_all_resources, resource_uris};
pub use service::ResourceService;
