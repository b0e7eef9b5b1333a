//! PDF to Word tool definition.

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
use crate::domains::widgets::simulated::{format_size, pdf_to_word};

/// Parameters for the PDF to Word tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PdfToWordParams {
    /// Path or file:// URI of a PDF (max 50 MB).
    pub path: String,
}

/// PDF to Word tool - simulated conversion to DOCX.
pub struct PdfToWordTool;

impl PdfToWordTool {
    pub const NAME: &'static str = "pdf_to_word";

    pub const DESCRIPTION: &'static str = "Convert a PDF document to an editable Word (DOCX) file. Simulated: no real conversion is performed and the result is flagged as such.";

    #[instrument(skip_all, fields(path = %params.path))]
    pub async fn execute(params: &PdfToWordParams, ctx: &ToolContext) -> CallToolResult {
        info!("PDF to Word tool called");

        let source = match open_source(&params.path, &ctx.config.security).await {
            Ok(s) => s,
            Err(result) => return result,
        };

        match pdf_to_word(&source, ctx.latency()).await {
            Ok(converted) => {
                let summary = format!(
                    "PDF converted to Word successfully! {} ({}) [simulated]",
                    converted.filename,
                    format_size(converted.size)
                );
                structured_result(summary, &converted)
            }
            Err(e) => validation_result(&e),
        }
    }

    pub async fn handle_json(arguments: Value, ctx: &ToolContext) -> Result<Value, String> {
        let params: PdfToWordParams = parse_json(arguments)?;
        Ok(to_json_response(Self::execute(&params, ctx).await))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<PdfToWordParams>(),
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
                let params: PdfToWordParams = parse_arguments(args)?;
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
    use crate::core::config::Config;
    use crate::domains::tools::context::test_support::{context, context_with};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_converts_pdf() {
        let dir = TempDir::new().unwrap();
        let pdf = write_file(&dir, "report.pdf", 1000);

        let params = PdfToWordParams {
            path: pdf.to_string_lossy().into_owned(),
        };
        let result = PdfToWordTool::execute(&params, &context()).await;

        assert_eq!(result.is_error, Some(false));
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["filename"], "report.docx");
        assert_eq!(structured["size"], 800);
        assert_eq!(structured["simulated"], true);
    }

    #[tokio::test]
    async fn test_rejects_file_outside_root() {
        let root = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        let pdf = write_file(&outside, "secret.pdf", 10);

        let mut config = Config::default();
        config.security.root_path = Some(root.path().to_path_buf());

        let params = PdfToWordParams {
            path: pdf.to_string_lossy().into_owned(),
        };
        let result = PdfToWordTool::execute(&params, &context_with(config)).await;
        assert_eq!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_rejects_non_pdf() {
        let dir = TempDir::new().unwrap();
        let doc = write_file(&dir, "notes.txt", 10);

        let response = PdfToWordTool::handle_json(
            serde_json::json!({ "path": doc.to_string_lossy() }),
            &context(),
        )
        .await
        .unwrap();
        assert_eq!(response["isError"], true);
    }
}
