//! Image compressor tool definition.

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
use crate::domains::widgets::simulated::{compress_image, format_size};

fn default_quality() -> u8 {
    75
}

/// Parameters for the image compressor.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ImageCompressorParams {
    /// Path or file:// URI of a JPG, PNG or WebP image (max 20 MB).
    pub path: String,

    /// Target quality in percent (10-100, default 75).
    #[serde(default = "default_quality")]
    pub quality: u8,
}

/// Image compressor tool - simulated re-encoding at lower quality.
pub struct ImageCompressorTool;

impl ImageCompressorTool {
    pub const NAME: &'static str = "image_compressor";

    pub const DESCRIPTION: &'static str = "Compress a JPG, PNG or WebP image to reduce its file size at the chosen quality. Simulated: no real compression is performed and the result is flagged as such.";

    #[instrument(skip_all, fields(path = %params.path, quality = params.quality))]
    pub async fn execute(params: &ImageCompressorParams, ctx: &ToolContext) -> CallToolResult {
        info!("Image compressor tool called");

        let source = match open_source(&params.path, &ctx.config.security).await {
            Ok(s) => s,
            Err(result) => return result,
        };

        match compress_image(&source, params.quality, ctx.latency()).await {
            Ok(compressed) => {
                let summary = format!(
                    "Image compressed successfully! {} -> {} (saved {}%) [simulated]",
                    format_size(compressed.original_size),
                    format_size(compressed.file.size),
                    compressed.reduction
                );
                structured_result(summary, &compressed)
            }
            Err(e) => validation_result(&e),
        }
    }

    pub async fn handle_json(arguments: Value, ctx: &ToolContext) -> Result<Value, String> {
        let params: ImageCompressorParams = parse_json(arguments)?;
        Ok(to_json_response(Self::execute(&params, ctx).await))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ImageCompressorParams>(),
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
                let params: ImageCompressorParams = parse_arguments(args)?;
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
    async fn test_compresses_png() {
        let dir = TempDir::new().unwrap();
        let png = write_file(&dir, "photo.png", 10_000);

        let params = ImageCompressorParams {
            path: png.to_string_lossy().into_owned(),
            quality: 75,
        };
        let result = ImageCompressorTool::execute(&params, &context()).await;

        assert_eq!(result.is_error, Some(false));
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["filename"], "photo_compressed.png");
        assert_eq!(structured["originalSize"], 10_000);
        assert!(structured["size"].as_u64().unwrap() < 10_000);
    }

    #[tokio::test]
    async fn test_quality_out_of_range() {
        let dir = TempDir::new().unwrap();
        let png = write_file(&dir, "photo.png", 100);

        let params = ImageCompressorParams {
            path: png.to_string_lossy().into_owned(),
            quality: 5,
        };
        let result = ImageCompressorTool::execute(&params, &context()).await;
        assert_eq!(result.is_error, Some(true));
    }
}
