//! PDF to JPG tool definition.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument};

use super::open_source;
use crate::domains::tools::ToolContext;
use crate::domains::tools::definitions::common::{
    parse_arguments, parse_json, structured_result, to_json_response, validation_result,
};
use crate::domains::widgets::simulated::pdf_to_jpg;

fn default_quality() -> u8 {
    90
}

/// Parameters for the PDF to JPG tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PdfToJpgParams {
    /// Path or file:// URI of a PDF (max 50 MB).
    pub path: String,

    /// JPG quality in percent (10-100, default 90).
    #[serde(default = "default_quality")]
    pub quality: u8,
}

/// PDF to JPG tool - simulated page rendering.
pub struct PdfToJpgTool;

impl PdfToJpgTool {
    pub const NAME: &'static str = "pdf_to_jpg";

    pub const DESCRIPTION: &'static str = "Convert each page of a PDF to a JPG image at the chosen quality. Simulated: no real rendering is performed and the result is flagged as such.";

    #[instrument(skip_all, fields(path = %params.path, quality = params.quality))]
    pub async fn execute(params: &PdfToJpgParams, ctx: &ToolContext) -> CallToolResult {
        info!("PDF to JPG tool called");

        let source = match open_source(&params.path, &ctx.config.security).await {
            Ok(s) => s,
            Err(result) => return result,
        };

        match pdf_to_jpg(&source, params.quality, ctx.latency()).await {
            Ok(converted) => {
                let pages: Vec<_> = converted.pages.iter().map(|p| p.filename.as_str()).collect();
                let summary = format!(
                    "PDF converted to {} JPG images! {} [simulated]",
                    converted.pages.len(),
                    pages.join(", ")
                );
                structured_result(summary, &converted)
            }
            Err(e) => validation_result(&e),
        }
    }

    pub async fn handle_json(arguments: Value, ctx: &ToolContext) -> Result<Value, String> {
        let params: PdfToJpgParams = parse_json(arguments)?;
        Ok(to_json_response(Self::execute(&params, ctx).await))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<PdfToJpgParams>(),
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
                let params: PdfToJpgParams = parse_arguments(args)?;
                Ok(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}
