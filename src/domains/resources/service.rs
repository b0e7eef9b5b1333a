//! Resource service implementation.
//!
//! Every resource is a read-only view of a catalog query. Reading one goes
//! through the same `QueryService` the navigator uses.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::definitions::CatalogUri;
use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::domains::catalog::QueryService;

/// Service for listing and reading catalog resources.
pub struct ResourceService {
    catalog: Arc<dyn QueryService>,

    /// Fixed resources.
    resources: Vec<Resource>,

    /// Templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

impl ResourceService {
    pub fn new(catalog: Arc<dyn QueryService>) -> Self {
        info!("Initializing ResourceService");
        Self {
            catalog,
            resources: get_all_resources(),
            templates: get_all_resource_templates(),
        }
    }

    /// List all fixed resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources.clone()
    }

    /// List all resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    #[instrument(skip(self))]
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let target = CatalogUri::parse(uri)?;
        let text = self.query(target).await?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: Some("application/json".to_string()),
                text,
                meta: None,
            }],
        })
    }

    async fn query(&self, target: CatalogUri) -> Result<String, ResourceError> {
        let catalog = &self.catalog;
        match target {
            CatalogUri::Categories => to_json(&catalog.list_categories().await?),
            CatalogUri::Category(id) => to_json(&catalog.get_category(id).await?),
            CatalogUri::CategoryTools(id) => {
                // An unknown category is an error here, not an empty list.
                catalog.get_category(id).await?;
                to_json(&catalog.list_tools_by_category(id).await?)
            }
            CatalogUri::Tools => to_json(&catalog.list_tools().await?),
            CatalogUri::FeaturedTools => to_json(&catalog.list_featured_tools().await?),
            CatalogUri::Tool(id) => to_json(&catalog.get_tool(id).await?),
            CatalogUri::Search(query) => to_json(&catalog.search_tools(&query).await?),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ResourceError> {
    serde_json::to_string_pretty(value).map_err(|e| ResourceError::internal(e.to_string()))
}
