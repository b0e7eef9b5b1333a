//! JPG to PDF tool definition.

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
use crate::domains::widgets::simulated::{Orientation, PageSize, format_size, jpg_to_pdf};

/// Parameters for the JPG to PDF tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct JpgToPdfParams {
    /// Paths or file:// URIs of JPG images (max 10 MB each), in page order.
    pub paths: Vec<String>,

    /// "A4" (default) or "Letter".
    #[serde(default)]
    pub page_size: PageSize,

    /// "portrait" (default) or "landscape".
    #[serde(default)]
    pub orientation: Orientation,
}

/// JPG to PDF tool - simulated merge of images into one PDF.
pub struct JpgToPdfTool;

impl JpgToPdfTool {
    pub const NAME: &'static str = "jpg_to_pdf";

    pub const DESCRIPTION: &'static str = "Combine one or more JPG images into a single PDF, one image per page. Simulated: no real PDF is written and the result is flagged as such.";

    #[instrument(skip_all, fields(files = params.paths.len()))]
    pub async fn execute(params: &JpgToPdfParams, ctx: &ToolContext) -> CallToolResult {
        info!("JPG to PDF tool called");

        let mut sources = Vec::with_capacity(params.paths.len());
        for path in &params.paths {
            match open_source(path, &ctx.config.security).await {
                Ok(s) => sources.push(s),
                Err(result) => return result,
            }
        }

        match jpg_to_pdf(&sources, params.page_size, params.orientation, ctx.latency()).await {
            Ok(converted) => {
                let summary = format!(
                    "{} images converted to PDF successfully! {} ({}, {} pages) [simulated]",
                    converted.page_count,
                    converted.file.filename,
                    format_size(converted.file.size),
                    converted.page_count
                );
                structured_result(summary, &converted)
            }
            Err(e) => validation_result(&e),
        }
    }

    pub async fn handle_json(arguments: Value, ctx: &ToolContext) -> Result<Value, String> {
        let params: JpgToPdfParams = parse_json(arguments)?;
        Ok(to_json_response(Self::execute(&params, ctx).await))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<JpgToPdfParams>(),
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
                let params: JpgToPdfParams = parse_arguments(args)?;
                Ok(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::write_file;
    use super::*;
    use crate::domains::tools::context::test_support::context;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_merges_images() {
        let dir = TempDir::new().unwrap();
        let a = write_file(&dir, "a.jpg", 1000);
        let b = write_file(&dir, "b.jpeg", 1000);

        let response = JpgToPdfTool::handle_json(
            serde_json::json!({
                "paths": [a.to_string_lossy(), b.to_string_lossy()],
                "page_size": "Letter",
                "orientation": "landscape"
            }),
            &context(),
        )
        .await
        .unwrap();

        assert_eq!(response["isError"], false);
        let structured = &response["structuredContent"];
        assert_eq!(structured["filename"], "converted_images.pdf");
        assert_eq!(structured["size"], 1400);
        assert_eq!(structured["pageCount"], 2);
        assert_eq!(structured["pageSize"], "Letter");
        assert_eq!(structured["orientation"], "landscape");
    }

    #[tokio::test]
    async fn test_requires_images() {
        let params = JpgToPdfParams {
            paths: vec![],
            page_size: PageSize::A4,
            orientation: Orientation::Portrait,
        };
        let result = JpgToPdfTool::execute(&params, &context()).await;
        assert_eq!(result.is_error, Some(true));
    }
}
