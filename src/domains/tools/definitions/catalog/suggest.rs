//! Catalog suggestion tool definition.
//!
//! Type-ahead suggestions for the search box.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument};

use crate::domains::navigation::SUGGEST_MIN_CHARS;
use crate::domains::tools::ToolContext;
use crate::domains::tools::definitions::common::{
    error_result, parse_arguments, parse_json, structured_result, to_json_response,
};

/// Parameters for the suggestion tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CatalogSuggestParams {
    /// Partially typed search text. Fewer than two characters yields nothing.
    pub query: String,
}

/// Suggestion tool - up to five tools matching a partial query.
pub struct CatalogSuggestTool;

impl CatalogSuggestTool {
    pub const NAME: &'static str = "catalog_suggest";

    pub const DESCRIPTION: &'static str = "Suggest up to 5 tools whose name or description contains the typed text. Needs at least 2 characters.";

    #[instrument(skip_all, fields(query = %params.query))]
    pub async fn execute(params: &CatalogSuggestParams, ctx: &ToolContext) -> CallToolResult {
        info!("Suggest tool called");

        let suggestions = match ctx.navigator.suggest(&params.query).await {
            Ok(s) => s,
            Err(e) => return error_result(&format!("Suggestion lookup failed: {}", e)),
        };

        let summary = if params.query.trim().chars().count() < SUGGEST_MIN_CHARS {
            format!("Type at least {} characters", SUGGEST_MIN_CHARS)
        } else if suggestions.is_empty() {
            format!("No tools match '{}'", params.query.trim())
        } else {
            suggestions
                .iter()
                .map(|s| format!("{} (/tool/{})", s.name, s.id))
                .collect::<Vec<_>>()
                .join("\n")
        };

        structured_result(summary, &suggestions)
    }

    pub async fn handle_json(arguments: Value, ctx: &ToolContext) -> Result<Value, String> {
        let params: CatalogSuggestParams = parse_json(arguments)?;
        Ok(to_json_response(Self::execute(&params, ctx).await))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CatalogSuggestParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn create_route<S>(ctx: ToolContext) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |call: ToolCallContext<'_, S>| {
            let args = call.arguments.clone();
            let ctx = ctx.clone();
            async move {
                let params: CatalogSuggestParams = parse_arguments(args)?;
                Ok(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}
