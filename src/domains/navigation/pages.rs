//! Page data assembled from catalog queries.

use serde::Serialize;
use std::collections::HashMap;

use super::view::ViewData;
use crate::domains::catalog::{
    CatalogResult, Category, CategoryId, QueryService, Tool, ToolId,
};
use crate::domains::widgets::WidgetKind;

/// Shortcuts offered above the search results.
pub const QUICK_FILTERS: [&str; 5] = ["PDF", "Image", "Calculator", "Text", "Converter"];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub featured_tools: Vec<Tool>,
    pub categories: Vec<Category>,
}

impl ViewData for HomePage {
    fn is_empty(&self) -> bool {
        self.featured_tools.is_empty() && self.categories.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub tools_ready: usize,
    pub total_uses: u64,
    pub featured: usize,
}

impl CategoryStats {
    pub fn from_tools(tools: &[Tool]) -> Self {
        Self {
            tools_ready: tools.iter().filter(|t| t.implemented).count(),
            total_uses: tools.iter().map(|t| t.usage_count).sum(),
            featured: tools.iter().filter(|t| t.featured).count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPage {
    pub category: Category,
    pub tools: Vec<Tool>,
    pub stats: CategoryStats,
}

impl ViewData for CategoryPage {
    fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// What the tool page can offer for a tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WidgetAvailability {
    /// Usable through the named MCP tool.
    Ready {
        widget: WidgetKind,
        mcp_tool: &'static str,
    },
    /// The tool is listed but not built yet.
    ComingSoon,
    /// Marked implemented, but no widget is wired to it.
    UnderDevelopment,
}

impl WidgetAvailability {
    pub fn for_tool(tool: &Tool) -> Self {
        if !tool.implemented {
            return Self::ComingSoon;
        }
        match WidgetKind::for_tool(tool.id) {
            Some(widget) => Self::Ready {
                widget,
                mcp_tool: widget.mcp_tool(),
            },
            None => Self::UnderDevelopment,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolPage {
    pub tool: Tool,
    pub widget: WidgetAvailability,
}

impl ViewData for ToolPage {
    fn is_empty(&self) -> bool {
        false
    }
}

/// Search hits from one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolGroup {
    pub category_id: CategoryId,
    pub category_name: String,
    pub tools: Vec<Tool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub query: String,
    pub results: Vec<Tool>,
    /// Results grouped by category, in order of first appearance.
    pub groups: Vec<ToolGroup>,
    pub quick_filters: Vec<&'static str>,
}

impl ViewData for SearchPage {
    fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticPage {
    pub title: &'static str,
    pub path: String,
}

/// A search suggestion shown under the search box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: ToolId,
    pub name: String,
    pub category_id: CategoryId,
}

pub(super) async fn load_home(service: &dyn QueryService) -> CatalogResult<HomePage> {
    let (featured_tools, categories) =
        tokio::try_join!(service.list_featured_tools(), service.list_categories())?;
    Ok(HomePage {
        featured_tools,
        categories,
    })
}

pub(super) async fn load_category(
    service: &dyn QueryService,
    id: CategoryId,
) -> CatalogResult<CategoryPage> {
    let (category, tools) = tokio::try_join!(
        service.get_category(id),
        service.list_tools_by_category(id)
    )?;
    let stats = CategoryStats::from_tools(&tools);
    Ok(CategoryPage {
        category,
        tools,
        stats,
    })
}

pub(super) async fn load_tool(service: &dyn QueryService, id: ToolId) -> CatalogResult<ToolPage> {
    let tool = service.get_tool(id).await?;
    let tool = service.increment_tool_usage(tool.id).await?;
    let widget = WidgetAvailability::for_tool(&tool);
    Ok(ToolPage { tool, widget })
}

pub(super) async fn load_search(
    service: &dyn QueryService,
    query: &str,
) -> CatalogResult<SearchPage> {
    let search = async {
        if query.trim().is_empty() {
            service.list_tools().await
        } else {
            service.search_tools(query.trim()).await
        }
    };
    let (results, categories) = tokio::try_join!(search, service.list_categories())?;
    let groups = group_by_category(&results, &categories);

    Ok(SearchPage {
        query: query.to_string(),
        results,
        groups,
        quick_filters: QUICK_FILTERS.to_vec(),
    })
}

fn group_by_category(tools: &[Tool], categories: &[Category]) -> Vec<ToolGroup> {
    let names: HashMap<CategoryId, &str> = categories
        .iter()
        .map(|c| (c.id, c.name.as_str()))
        .collect();

    let mut groups: Vec<ToolGroup> = Vec::new();
    for tool in tools {
        match groups.iter_mut().find(|g| g.category_id == tool.category_id) {
            Some(group) => group.tools.push(tool.clone()),
            None => groups.push(ToolGroup {
                category_id: tool.category_id,
                category_name: names
                    .get(&tool.category_id)
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| format!("Category {}", tool.category_id)),
                tools: vec![tool.clone()],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::CatalogService;

    fn service() -> CatalogService {
        CatalogService::builtin().unwrap()
    }

    #[tokio::test]
    async fn test_home_page() {
        let page = load_home(&service()).await.unwrap();
        assert_eq!(page.categories.len(), 8);
        assert!(page.featured_tools.iter().all(|t| t.featured));
        assert!(!page.is_empty());
    }

    #[tokio::test]
    async fn test_category_page_stats() {
        let page = load_category(&service(), CategoryId(1)).await.unwrap();
        assert_eq!(page.category.name, "PDF Tools");
        assert_eq!(page.category.tool_count as usize, page.tools.len());
        assert_eq!(
            page.stats.total_uses,
            page.tools.iter().map(|t| t.usage_count).sum::<u64>()
        );
        assert!(page.stats.tools_ready <= page.tools.len());
    }

    #[tokio::test]
    async fn test_missing_category_fails() {
        let err = load_category(&service(), CategoryId(999)).await.unwrap_err();
        assert_eq!(err.to_string(), "Category not found");
    }

    #[tokio::test]
    async fn test_tool_page_increments_usage() {
        let service = service();
        let before = service.get_tool(ToolId(11)).await.unwrap().usage_count;

        let page = load_tool(&service, ToolId(11)).await.unwrap();

        assert_eq!(page.tool.usage_count, before + 1);
        assert_eq!(
            page.widget,
            WidgetAvailability::Ready {
                widget: WidgetKind::PasswordGenerator,
                mcp_tool: "password_generator",
            }
        );
    }

    #[tokio::test]
    async fn test_widget_availability() {
        let service = service();
        let coming_soon = service.get_tool(ToolId(2)).await.unwrap();
        assert!(!coming_soon.implemented);
        assert_eq!(
            WidgetAvailability::for_tool(&coming_soon),
            WidgetAvailability::ComingSoon
        );

        let bmi = service.get_tool(ToolId(18)).await.unwrap();
        assert_eq!(
            WidgetAvailability::for_tool(&bmi),
            WidgetAvailability::UnderDevelopment
        );
    }

    #[tokio::test]
    async fn test_blank_search_lists_everything() {
        let service = service();
        let page = load_search(&service, "   ").await.unwrap();
        assert_eq!(page.results.len(), service.list_tools().await.unwrap().len());
        assert_eq!(page.groups.len(), 8);
        assert_eq!(
            page.groups.iter().map(|g| g.tools.len()).sum::<usize>(),
            page.results.len()
        );
    }

    #[tokio::test]
    async fn test_search_groups_by_category() {
        let page = load_search(&service(), "pdf").await.unwrap();
        assert!(!page.results.is_empty());
        assert_eq!(page.groups[0].category_name, "PDF Tools");
    }

    #[tokio::test]
    async fn test_search_without_matches_is_empty() {
        let page = load_search(&service(), "zzzz-no-such-tool").await.unwrap();
        assert!(page.is_empty());
        assert!(page.groups.is_empty());
    }
}
