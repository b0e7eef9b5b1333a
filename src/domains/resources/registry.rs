//! Resource Registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Define it in `definitions/`
//! 2. Register it here in `get_all_resources()` or `get_all_resource_templates()`

use rmcp::model::{AnnotateAble, RawResourceTemplate, Resource, ResourceTemplate};

use super::definitions::{
    CategoriesResource, FeaturedToolsResource, ResourceDefinition, ToolsResource,
};

/// Get all fixed resources.
pub fn get_all_resources() -> Vec<Resource> {
    vec![
        CategoriesResource::resource(),
        ToolsResource::resource(),
        FeaturedToolsResource::resource(),
    ]
}

fn template(uri_template: &str, name: &str, title: &str, description: &str) -> ResourceTemplate {
    RawResourceTemplate {
        uri_template: uri_template.to_string(),
        name: name.to_string(),
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        mime_type: Some("application/json".to_string()),
    }
    .no_annotation()
}

/// Get all registered resource templates.
///
/// Resource templates use URI templates (RFC 6570) to describe
/// parameterized resources that clients can fill in.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![
        template(
            "catalog://categories/{id}",
            "Category",
            "Category by id",
            "One category with its computed tool count",
        ),
        template(
            "catalog://categories/{id}/tools",
            "Category Tools",
            "Tools in a category",
            "Tools belonging to one category, in catalog order",
        ),
        template(
            "catalog://tools/{id}",
            "Tool",
            "Tool by id",
            "One tool record including its usage count",
        ),
        template(
            "catalog://search/{query}",
            "Tool Search",
            "Search tools",
            "Case-insensitive match on tool names and descriptions",
        ),
    ]
}

/// Get the list of all fixed resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![
        CategoriesResource::URI,
        ToolsResource::URI,
        FeaturedToolsResource::URI,
    ]
}
