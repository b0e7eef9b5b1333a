//! In-memory catalog store.
//!
//! Categories are immutable once loaded. Tools are kept behind a lock because
//! `usage_count` is the one field that changes during a session.

use std::collections::HashSet;
use std::path::Path;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::error::{CatalogError, CatalogResult};
use super::model::{Category, CategoryId, Tool, ToolId};

const BUILTIN_CATEGORIES: &str = include_str!("data/categories.json");
const BUILTIN_TOOLS: &str = include_str!("data/tools.json");

/// File name of the categories fixture inside a catalog directory.
pub const CATEGORIES_FILE: &str = "categories.json";

/// File name of the tools fixture inside a catalog directory.
pub const TOOLS_FILE: &str = "tools.json";

/// Holds the category and tool records for one server session.
#[derive(Debug)]
pub struct CatalogStore {
    categories: Vec<Category>,
    tools: RwLock<Vec<Tool>>,
}

impl CatalogStore {
    /// Build a store from records, rejecting datasets that break the
    /// catalog invariants.
    pub fn new(categories: Vec<Category>, tools: Vec<Tool>) -> CatalogResult<Self> {
        validate(&categories, &tools)?;

        info!(
            "Catalog loaded: {} categories, {} tools",
            categories.len(),
            tools.len()
        );

        Ok(Self {
            categories,
            tools: RwLock::new(tools),
        })
    }

    /// Load the dataset compiled into the binary.
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_json(BUILTIN_CATEGORIES, BUILTIN_TOOLS)
    }

    /// Load `categories.json` and `tools.json` from a directory.
    pub fn from_dir(dir: &Path) -> CatalogResult<Self> {
        info!("Loading catalog from {}", dir.display());
        let categories = std::fs::read_to_string(dir.join(CATEGORIES_FILE))?;
        let tools = std::fs::read_to_string(dir.join(TOOLS_FILE))?;
        Self::from_json(&categories, &tools)
    }

    /// Parse both fixtures from JSON text.
    pub fn from_json(categories: &str, tools: &str) -> CatalogResult<Self> {
        Self::new(serde_json::from_str(categories)?, serde_json::from_str(tools)?)
    }

    /// All categories with their tool count derived from the current tools.
    pub async fn categories(&self) -> Vec<Category> {
        let tools = self.tools.read().await;
        self.categories
            .iter()
            .map(|c| with_tool_count(c, &tools))
            .collect()
    }

    /// A single category with its derived tool count.
    pub async fn category(&self, id: CategoryId) -> CatalogResult<Category> {
        let category = self
            .categories
            .iter()
            .find(|c| c.id == id)
            .ok_or(CatalogError::CategoryNotFound(id))?;
        let tools = self.tools.read().await;
        Ok(with_tool_count(category, &tools))
    }

    /// Snapshot of the tools matching `predicate`, in dataset order.
    pub async fn tools_where<F>(&self, predicate: F) -> Vec<Tool>
    where
        F: Fn(&Tool) -> bool,
    {
        self.tools
            .read()
            .await
            .iter()
            .filter(|t| predicate(t))
            .cloned()
            .collect()
    }

    /// A single tool.
    pub async fn tool(&self, id: ToolId) -> CatalogResult<Tool> {
        self.tools
            .read()
            .await
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(CatalogError::ToolNotFound(id))
    }

    /// Add one to a tool's usage counter and return the updated record.
    pub async fn increment_usage(&self, id: ToolId) -> CatalogResult<Tool> {
        let mut tools = self.tools.write().await;
        let tool = tools
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(CatalogError::ToolNotFound(id))?;
        tool.usage_count += 1;
        Ok(tool.clone())
    }
}

fn with_tool_count(category: &Category, tools: &[Tool]) -> Category {
    let mut category = category.clone();
    category.tool_count = tools
        .iter()
        .filter(|t| t.category_id == category.id)
        .count() as u32;
    category
}

fn validate(categories: &[Category], tools: &[Tool]) -> CatalogResult<()> {
    let mut category_ids = HashSet::new();
    for category in categories {
        if !category_ids.insert(category.id) {
            return Err(CatalogError::invalid_dataset(format!(
                "duplicate category id {}",
                category.id
            )));
        }
    }

    let mut tool_ids = HashSet::new();
    for tool in tools {
        if !tool_ids.insert(tool.id) {
            return Err(CatalogError::invalid_dataset(format!(
                "duplicate tool id {}",
                tool.id
            )));
        }
        if !category_ids.contains(&tool.category_id) {
            return Err(CatalogError::invalid_dataset(format!(
                "tool {} references unknown category {}",
                tool.id, tool.category_id
            )));
        }
    }

    for category in categories {
        let actual = tools.iter().filter(|t| t.category_id == category.id).count() as u32;
        if category.tool_count != actual {
            warn!(
                "Category {} declares toolCount {} but has {} tools; serving the computed count",
                category.id, category.tool_count, actual
            );
        }
    }

    Ok(())
}
