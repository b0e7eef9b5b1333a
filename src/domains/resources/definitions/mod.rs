//! Resource definitions module.
//!
//! Fixed resources implement [`ResourceDefinition`]; parameterized ones are
//! listed as templates in `registry.rs` and resolved through [`CatalogUri`].
//!
//! ## Adding a New Resource
//!
//! 1. Add a `CatalogUri` variant and teach `CatalogUri::parse` its shape
//! 2. Implement `ResourceDefinition` (or add a template in `registry.rs`)
//! 3. Answer it in `ResourceService::query`

mod catalog;
mod uri;

pub use catalog::{CategoriesResource, FeaturedToolsResource, ToolsResource};
pub use uri::CatalogUri;

use rmcp::model::{AnnotateAble, RawResource, Resource};

/// Trait for resources with a fixed URI.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str = "application/json";

    /// Resource metadata as listed to clients.
    fn resource() -> Resource {
        let mut raw = RawResource::new(Self::URI, Self::NAME);
        raw.description = Some(Self::DESCRIPTION.to_string());
        raw.mime_type = Some(Self::MIME_TYPE.to_string());
        raw.no_annotation()
    }
}
