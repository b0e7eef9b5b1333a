//! JSON formatter tool definition.
//!
//! The formatter keeps its last good output between calls; a failed action
//! reports the parser error and leaves that output alone.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};

use crate::domains::tools::ToolContext;
use crate::domains::tools::definitions::common::{
    parse_arguments, parse_json, structured_result, to_json_response,
};
use crate::domains::widgets::json_format::{DEFAULT_INDENT, JsonAction};

fn default_indent() -> usize {
    DEFAULT_INDENT
}

/// Parameters for the JSON formatter.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct JsonFormatterParams {
    /// JSON text to process.
    pub input: String,

    /// "format" (default), "minify" or "validate".
    #[serde(default)]
    pub action: JsonAction,

    /// Spaces per indentation level when formatting (1-8, default 2).
    #[serde(default = "default_indent")]
    pub indent: usize,
}

#[derive(Debug, Serialize)]
struct FormatterOutput<'a> {
    action: JsonAction,
    valid: bool,
    output: Option<&'a str>,
}

/// JSON formatter tool - pretty-print, minify or validate JSON.
pub struct JsonFormatterTool;

impl JsonFormatterTool {
    pub const NAME: &'static str = "json_formatter";

    pub const DESCRIPTION: &'static str = "Format (pretty-print with 1-8 space indentation), minify, or validate JSON text. Key order is preserved.";

    #[instrument(skip_all, fields(action = ?params.action))]
    pub async fn execute(params: &JsonFormatterParams, ctx: &ToolContext) -> CallToolResult {
        info!("JSON formatter tool called ({} bytes)", params.input.len());

        let mut session = ctx.json_session.lock().await;
        if let Err(e) = session.apply(params.action, &params.input, params.indent) {
            let mut content = vec![Content::text(e.message().to_string())];
            if let Some(previous) = session.output() {
                content.push(Content::text(format!("Previous output:\n{}", previous)));
            }
            return CallToolResult::error(content);
        }

        let (summary, output) = match params.action {
            JsonAction::Validate => ("JSON is valid!".to_string(), None),
            _ => {
                let output = session.output().unwrap_or_default();
                (output.to_string(), Some(output))
            }
        };

        let data = FormatterOutput {
            action: params.action,
            valid: true,
            output,
        };
        structured_result(summary, &data)
    }

    pub async fn handle_json(arguments: Value, ctx: &ToolContext) -> Result<Value, String> {
        let params: JsonFormatterParams = parse_json(arguments)?;
        Ok(to_json_response(Self::execute(&params, ctx).await))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<JsonFormatterParams>(),
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
                let params: JsonFormatterParams = parse_arguments(args)?;
                Ok(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}
