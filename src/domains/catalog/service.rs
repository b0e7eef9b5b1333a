//! Query service over the catalog store.
//!
//! `QueryService` is the only way views and resources reach catalog data. The
//! in-memory `CatalogService` stands in for a remote catalog API; another
//! backend only has to implement the trait.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

use super::error::CatalogResult;
use super::latency::{Latency, Operation};
use super::model::{Category, CategoryId, Tool, ToolId};
use super::store::CatalogStore;
use crate::core::config::CatalogConfig;

/// Read and usage-tracking operations over the catalog.
#[async_trait]
pub trait QueryService: Send + Sync {
    /// All categories, in dataset order.
    async fn list_categories(&self) -> CatalogResult<Vec<Category>>;

    /// One category by id.
    async fn get_category(&self, id: CategoryId) -> CatalogResult<Category>;

    /// All tools, in dataset order.
    async fn list_tools(&self) -> CatalogResult<Vec<Tool>>;

    /// One tool by id.
    async fn get_tool(&self, id: ToolId) -> CatalogResult<Tool>;

    /// Tools belonging to a category; empty when the category has none.
    async fn list_tools_by_category(&self, category_id: CategoryId) -> CatalogResult<Vec<Tool>>;

    /// Tools flagged as featured.
    async fn list_featured_tools(&self) -> CatalogResult<Vec<Tool>>;

    /// Case-insensitive substring search over tool names and descriptions.
    async fn search_tools(&self, query: &str) -> CatalogResult<Vec<Tool>>;

    /// Record one visit to a tool and return the updated record.
    async fn increment_tool_usage(&self, id: ToolId) -> CatalogResult<Tool>;
}

/// In-memory implementation of [`QueryService`].
#[derive(Debug, Clone)]
pub struct CatalogService {
    store: Arc<CatalogStore>,
    latency: Latency,
}

impl CatalogService {
    /// Create a service over an existing store.
    pub fn new(store: CatalogStore, latency: Latency) -> Self {
        Self {
            store: Arc::new(store),
            latency,
        }
    }

    /// Load the dataset named by the configuration, or the built-in one.
    pub fn from_config(config: &CatalogConfig) -> CatalogResult<Self> {
        let store = match &config.data_dir {
            Some(dir) => CatalogStore::from_dir(dir)?,
            None => CatalogStore::builtin()?,
        };
        Ok(Self::new(store, Latency::new(config.simulate_latency)))
    }

    /// The built-in dataset with no simulated latency.
    pub fn builtin() -> CatalogResult<Self> {
        Ok(Self::new(CatalogStore::builtin()?, Latency::disabled()))
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }
}

#[async_trait]
impl QueryService for CatalogService {
    #[instrument(skip(self))]
    async fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        self.latency.pause(Operation::ListCategories).await;
        Ok(self.store.categories().await)
    }

    #[instrument(skip(self))]
    async fn get_category(&self, id: CategoryId) -> CatalogResult<Category> {
        self.latency.pause(Operation::GetCategory).await;
        self.store.category(id).await
    }

    #[instrument(skip(self))]
    async fn list_tools(&self) -> CatalogResult<Vec<Tool>> {
        self.latency.pause(Operation::ListTools).await;
        Ok(self.store.tools_where(|_| true).await)
    }

    #[instrument(skip(self))]
    async fn get_tool(&self, id: ToolId) -> CatalogResult<Tool> {
        self.latency.pause(Operation::GetTool).await;
        self.store.tool(id).await
    }

    #[instrument(skip(self))]
    async fn list_tools_by_category(&self, category_id: CategoryId) -> CatalogResult<Vec<Tool>> {
        self.latency.pause(Operation::ListToolsByCategory).await;
        Ok(self
            .store
            .tools_where(|t| t.category_id == category_id)
            .await)
    }

    #[instrument(skip(self))]
    async fn list_featured_tools(&self) -> CatalogResult<Vec<Tool>> {
        self.latency.pause(Operation::ListFeaturedTools).await;
        Ok(self.store.tools_where(|t| t.featured).await)
    }

    #[instrument(skip(self))]
    async fn search_tools(&self, query: &str) -> CatalogResult<Vec<Tool>> {
        self.latency.pause(Operation::SearchTools).await;
        let needle = query.to_lowercase();
        let results = self.store.tools_where(|t| t.matches(&needle)).await;
        debug!("Search '{}' matched {} tools", query, results.len());
        Ok(results)
    }

    #[instrument(skip(self))]
    async fn increment_tool_usage(&self, id: ToolId) -> CatalogResult<Tool> {
        self.latency.pause(Operation::IncrementToolUsage).await;
        let tool = self.store.increment_usage(id).await?;
        debug!("Tool {} usage is now {}", id, tool.usage_count);
        Ok(tool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::CatalogError;
    use std::time::Duration;
    use tokio::time::Instant;

    fn service() -> CatalogService {
        CatalogService::builtin().unwrap()
    }

    #[tokio::test]
    async fn test_get_category_for_every_listed_id() {
        let service = service();
        for category in service.list_categories().await.unwrap() {
            let fetched = service.get_category(category.id).await.unwrap();
            assert_eq!(fetched.id, category.id);
        }
    }

    #[tokio::test]
    async fn test_get_category_not_found() {
        let result = service().get_category(CategoryId(999)).await;
        let err = result.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Category not found");
    }

    #[tokio::test]
    async fn test_get_tool_not_found() {
        let err = service().get_tool(ToolId(0)).await.unwrap_err();
        assert!(matches!(err, CatalogError::ToolNotFound(ToolId(0))));
        assert_eq!(err.to_string(), "Tool not found");
    }

    #[tokio::test]
    async fn test_by_category_is_ordered_subset_of_all_tools() {
        let service = service();
        let all = service.list_tools().await.unwrap();
        for category in service.list_categories().await.unwrap() {
            let expected: Vec<_> = all
                .iter()
                .filter(|t| t.category_id == category.id)
                .cloned()
                .collect();
            let actual = service.list_tools_by_category(category.id).await.unwrap();
            assert_eq!(actual, expected);
            assert_eq!(category.tool_count as usize, actual.len());
        }
    }

    #[tokio::test]
    async fn test_by_unknown_category_is_empty() {
        let tools = service().list_tools_by_category(CategoryId(404)).await.unwrap();
        assert!(tools.is_empty());
    }

    #[tokio::test]
    async fn test_featured_only() {
        let featured = service().list_featured_tools().await.unwrap();
        assert!(!featured.is_empty());
        assert!(featured.iter().all(|t| t.featured));
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let service = service();
        let upper = service.search_tools("PDF").await.unwrap();
        let lower = service.search_tools("pdf").await.unwrap();
        assert_eq!(upper, lower);
        assert!(upper.iter().any(|t| t.name == "PDF to Word"));
    }

    #[tokio::test]
    async fn test_search_matches_description() {
        let results = service().search_tools("reading time").await.unwrap();
        let names: Vec<_> = results.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Word Counter"]);
    }

    #[tokio::test]
    async fn test_increment_usage_n_times() {
        let service = service();
        let before = service.get_tool(ToolId(17)).await.unwrap().usage_count;

        for n in 1..=5 {
            let updated = service.increment_tool_usage(ToolId(17)).await.unwrap();
            assert_eq!(updated.usage_count, before + n);
        }

        let after = service.get_tool(ToolId(17)).await.unwrap().usage_count;
        assert_eq!(after, before + 5);
    }

    #[tokio::test]
    async fn test_concurrent_increments_are_not_lost() {
        let service = service();
        let before = service.get_tool(ToolId(1)).await.unwrap().usage_count;

        let handles: Vec<_> = (0..20)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move { service.increment_tool_usage(ToolId(1)).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let after = service.get_tool(ToolId(1)).await.unwrap().usage_count;
        assert_eq!(after, before + 20);
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_latency_applies() {
        let service = CatalogService::new(CatalogStore::builtin().unwrap(), Latency::new(true));
        let start = Instant::now();
        service.get_tool(ToolId(1)).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(200));
    }
}
