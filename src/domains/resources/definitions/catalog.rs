//! Fixed catalog resources.

use super::ResourceDefinition;

/// Every category with its computed tool count.
pub struct CategoriesResource;

impl ResourceDefinition for CategoriesResource {
    const URI: &'static str = "catalog://categories";
    const NAME: &'static str = "Categories";
    const DESCRIPTION: &'static str = "All tool categories with their tool counts";
}

/// Every tool in the catalog.
pub struct ToolsResource;

impl ResourceDefinition for ToolsResource {
    const URI: &'static str = "catalog://tools";
    const NAME: &'static str = "Tools";
    const DESCRIPTION: &'static str = "All tools in the catalog, in catalog order";
}

/// Tools flagged as featured.
pub struct FeaturedToolsResource;

impl ResourceDefinition for FeaturedToolsResource {
    const URI: &'static str = "catalog://tools/featured";
    const NAME: &'static str = "Featured Tools";
    const DESCRIPTION: &'static str = "Tools highlighted on the home page";
}
