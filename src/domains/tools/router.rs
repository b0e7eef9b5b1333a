//! Tool Router - builds the rmcp ToolRouter for STDIO/TCP transport.
//!
//! Each tool knows how to create its own route.

use rmcp::handler::server::tool::ToolRouter;

use super::ToolContext;
use super::definitions::{
    AgeCalculatorTool, CatalogSuggestTool, ImageCompressorTool, JpgToPdfTool, JsonFormatterTool,
    NavigateTool, PasswordGeneratorTool, PdfToJpgTool, PdfToWordTool, QrCodeGeneratorTool,
    UnitConverterTool, WordCounterTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(ctx: ToolContext) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(NavigateTool::create_route(ctx.clone()))
        .with_route(CatalogSuggestTool::create_route(ctx.clone()))
        .with_route(AgeCalculatorTool::create_route())
        .with_route(UnitConverterTool::create_route())
        .with_route(PasswordGeneratorTool::create_route())
        .with_route(JsonFormatterTool::create_route(ctx.clone()))
        .with_route(WordCounterTool::create_route())
        .with_route(QrCodeGeneratorTool::create_route(ctx.config.clone()))
        .with_route(PdfToWordTool::create_route(ctx.clone()))
        .with_route(PdfToJpgTool::create_route(ctx.clone()))
        .with_route(JpgToPdfTool::create_route(ctx.clone()))
        .with_route(ImageCompressorTool::create_route(ctx))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::domains::tools::context::test_support::context;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(context());
        let tools = router.list_all();
        assert_eq!(tools.len(), 12);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"navigate"));
        assert!(names.contains(&"catalog_suggest"));
        assert!(names.contains(&"json_formatter"));
        assert!(names.contains(&"qr_code_generator"));
        assert!(names.contains(&"image_compressor"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let ctx = context();
        let registry = ToolRegistry::new(ctx.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(ctx);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
