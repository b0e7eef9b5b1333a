//! Navigate tool definition.
//!
//! Moves the directory to a location and returns the loaded page.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument};

use crate::domains::navigation::{Page, PageView, ViewState};
use crate::domains::tools::ToolContext;
use crate::domains::tools::definitions::common::{
    parse_arguments, parse_json, structured_result, to_json_response,
};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the navigate tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NavigateParams {
    /// Location to open, e.g. "/", "/category/1", "/tool/11", "/search?q=pdf".
    /// Omit to reload the current location (retry after a failure).
    #[serde(default)]
    pub path: Option<String>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Navigate tool - opens a directory page.
pub struct NavigateTool;

impl NavigateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "navigate";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Open a page of the utility tools directory: home (featured tools and categories), a category, a tool, search results, or an info page. Omit the path to reload the current page.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(path = ?params.path))]
    pub async fn execute(params: &NavigateParams, ctx: &ToolContext) -> CallToolResult {
        info!("Navigate tool called");
        let page = ctx.navigator.navigate(params.path.as_deref()).await;
        structured_result(summarize(&page), &page)
    }

    /// Handle a raw JSON-RPC call.
    pub async fn handle_json(arguments: Value, ctx: &ToolContext) -> Result<Value, String> {
        let params: NavigateParams = parse_json(arguments)?;
        Ok(to_json_response(Self::execute(&params, ctx).await))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<NavigateParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(ctx: ToolContext) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |call: ToolCallContext<'_, S>| {
            let args = call.arguments.clone();
            let ctx = ctx.clone();
            async move {
                let params: NavigateParams = parse_arguments(args)?;
                Ok(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// One-line description of a loaded page.
fn summarize(page: &Page) -> String {
    fn state_line<T>(state: &ViewState<T>, describe: impl Fn(&T) -> String) -> String {
        match state {
            ViewState::Ready(data) => describe(data),
            ViewState::Empty(data) => format!("{} (nothing to show)", describe(data)),
            ViewState::Failed(message) => format!(
                "Failed to load: {}. Call navigate without a path to retry.",
                message
            ),
            ViewState::Loading => "Still loading a newer request".to_string(),
            ViewState::Idle => "Not loaded".to_string(),
        }
    }

    let body = match &page.view {
        PageView::Home(state) => state_line(state, |home| {
            format!(
                "Home: {} featured tools, {} categories",
                home.featured_tools.len(),
                home.categories.len()
            )
        }),
        PageView::Category(state) => state_line(state, |c| {
            format!(
                "{}: {} tools, {} ready, {} total uses",
                c.category.name,
                c.tools.len(),
                c.stats.tools_ready,
                c.stats.total_uses
            )
        }),
        PageView::Tool(state) => state_line(state, |t| {
            format!("{}: {}", t.tool.name, t.tool.description)
        }),
        PageView::Search(state) => state_line(state, |s| {
            if s.query.trim().is_empty() {
                format!("Browse all {} available tools", s.results.len())
            } else {
                format!("Found {} tools matching '{}'", s.results.len(), s.query)
            }
        }),
        PageView::Static(page) => page.title.to_string(),
        PageView::NotFound { path } => format!("Page not found: {}", path),
    };

    format!("{} -> {}", page.route, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::context::test_support::context;
    use rmcp::model::RawContent;

    fn text(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(t) => t.text.clone(),
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_navigate_category() {
        let ctx = context();
        let params = NavigateParams {
            path: Some("/category/1".to_string()),
        };
        let result = NavigateTool::execute(&params, &ctx).await;

        assert_eq!(result.is_error, Some(false));
        assert!(text(&result).starts_with("/category/1 -> PDF Tools: 5 tools"));
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["view"], "category");
        assert_eq!(structured["status"], "ready");
    }

    #[tokio::test]
    async fn test_navigate_failure_suggests_retry() {
        let ctx = context();
        let params = NavigateParams {
            path: Some("/tool/404".to_string()),
        };
        let result = NavigateTool::execute(&params, &ctx).await;
        assert!(text(&result).contains("Tool not found"));
        assert!(text(&result).contains("retry"));
    }

    #[tokio::test]
    async fn test_handle_json_defaults_to_current_location() {
        let ctx = context();
        let response = NavigateTool::handle_json(serde_json::json!({}), &ctx)
            .await
            .unwrap();
        assert_eq!(response["structuredContent"]["route"], "/");
        assert_eq!(response["isError"], false);
    }
}
