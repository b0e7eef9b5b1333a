//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The list of tool names and their metadata
//! - JSON dispatch for tool calls, used by the HTTP transport

use rmcp::model::Tool;
use serde_json::Value;
use tracing::warn;

use super::ToolContext;
use super::definitions::{
    AgeCalculatorTool, CatalogSuggestTool, ImageCompressorTool, JpgToPdfTool, JsonFormatterTool,
    NavigateTool, PasswordGeneratorTool, PdfToJpgTool, PdfToWordTool, QrCodeGeneratorTool,
    UnitConverterTool, WordCounterTool,
};
use super::error::ToolError;

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    ctx: ToolContext,
}

impl ToolRegistry {
    /// Create a new tool registry sharing the given context.
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            NavigateTool::NAME,
            CatalogSuggestTool::NAME,
            AgeCalculatorTool::NAME,
            UnitConverterTool::NAME,
            PasswordGeneratorTool::NAME,
            JsonFormatterTool::NAME,
            WordCounterTool::NAME,
            QrCodeGeneratorTool::NAME,
            PdfToWordTool::NAME,
            PdfToJpgTool::NAME,
            JpgToPdfTool::NAME,
            ImageCompressorTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            NavigateTool::to_tool(),
            CatalogSuggestTool::to_tool(),
            AgeCalculatorTool::to_tool(),
            UnitConverterTool::to_tool(),
            PasswordGeneratorTool::to_tool(),
            JsonFormatterTool::to_tool(),
            WordCounterTool::to_tool(),
            QrCodeGeneratorTool::to_tool(),
            PdfToWordTool::to_tool(),
            PdfToJpgTool::to_tool(),
            JpgToPdfTool::to_tool(),
            ImageCompressorTool::to_tool(),
        ]
    }

    /// Dispatch a JSON tool call to the appropriate handler.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        let ctx = &self.ctx;
        let result = match name {
            NavigateTool::NAME => NavigateTool::handle_json(arguments, ctx).await,
            CatalogSuggestTool::NAME => CatalogSuggestTool::handle_json(arguments, ctx).await,
            AgeCalculatorTool::NAME => AgeCalculatorTool::handle_json(arguments),
            UnitConverterTool::NAME => UnitConverterTool::handle_json(arguments),
            PasswordGeneratorTool::NAME => PasswordGeneratorTool::handle_json(arguments),
            JsonFormatterTool::NAME => JsonFormatterTool::handle_json(arguments, ctx).await,
            WordCounterTool::NAME => WordCounterTool::handle_json(arguments),
            QrCodeGeneratorTool::NAME => {
                QrCodeGeneratorTool::handle_json(arguments, ctx.config.clone())
            }
            PdfToWordTool::NAME => PdfToWordTool::handle_json(arguments, ctx).await,
            PdfToJpgTool::NAME => PdfToJpgTool::handle_json(arguments, ctx).await,
            JpgToPdfTool::NAME => JpgToPdfTool::handle_json(arguments, ctx).await,
            ImageCompressorTool::NAME => ImageCompressorTool::handle_json(arguments, ctx).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                return Err(ToolError::not_found(name));
            }
        };
        result.map_err(ToolError::invalid_arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::context::test_support::context;
    use crate::domains::widgets::WidgetKind;

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(context());
        let names = registry.tool_names();
        assert_eq!(names.len(), 12);
        assert!(names.contains(&"navigate"));
        assert!(names.contains(&"catalog_suggest"));
        assert!(names.contains(&"age_calculator"));
        assert!(names.contains(&"unit_converter"));
        assert!(names.contains(&"password_generator"));
        assert!(names.contains(&"json_formatter"));
        assert!(names.contains(&"word_counter"));
        assert!(names.contains(&"qr_code_generator"));
        assert!(names.contains(&"pdf_to_word"));
        assert!(names.contains(&"pdf_to_jpg"));
        assert!(names.contains(&"jpg_to_pdf"));
        assert!(names.contains(&"image_compressor"));
    }

    #[test]
    fn test_metadata_matches_names() {
        let registry = ToolRegistry::new(context());
        let tools = ToolRegistry::get_all_tools();
        let names = registry.tool_names();
        assert_eq!(tools.len(), names.len());
        for tool in &tools {
            assert!(names.iter().any(|n| tool.name == *n));
        }
    }

    #[test]
    fn test_every_widget_has_a_tool() {
        let registry = ToolRegistry::new(context());
        let names = registry.tool_names();
        for widget in WidgetKind::ALL {
            assert!(names.contains(&widget.mcp_tool()), "{:?}", widget);
        }
    }

    #[tokio::test]
    async fn test_call_word_counter() {
        let registry = ToolRegistry::new(context());
        let result = registry
            .call_tool("word_counter", serde_json::json!({ "text": "One two. Three!" }))
            .await
            .unwrap();
        assert_eq!(result["isError"], false);
        assert_eq!(result["structuredContent"]["words"], 3);
    }

    #[tokio::test]
    async fn test_call_navigate_shares_location() {
        let registry = ToolRegistry::new(context());
        registry
            .call_tool("navigate", serde_json::json!({ "path": "/about" }))
            .await
            .unwrap();
        let reloaded = registry
            .call_tool("navigate", serde_json::json!({}))
            .await
            .unwrap();
        assert_eq!(reloaded["structuredContent"]["route"], "/about");
    }

    #[tokio::test]
    async fn test_call_unknown() {
        let registry = ToolRegistry::new(context());
        let result = registry.call_tool("unknown", serde_json::json!({})).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_call_invalid_arguments() {
        let registry = ToolRegistry::new(context());
        let result = registry
            .call_tool("unit_converter", serde_json::json!({ "value": "ten" }))
            .await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
