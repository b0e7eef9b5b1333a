//! Word counter tool definition.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument};

use crate::domains::tools::definitions::common::{
    parse_arguments, parse_json, structured_result, to_json_response,
};
use crate::domains::widgets::word_count::analyze;

/// Parameters for the word counter.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WordCounterParams {
    /// Text to analyze.
    pub text: String,
}

/// Word counter tool - counts, reading time and readability.
pub struct WordCounterTool;

impl WordCounterTool {
    pub const NAME: &'static str = "word_counter";

    pub const DESCRIPTION: &'static str = "Count characters, words, sentences and paragraphs in a text, and estimate reading time, speaking time and Flesch readability.";

    #[instrument(skip_all)]
    pub fn execute(params: &WordCounterParams) -> CallToolResult {
        info!("Word counter tool called ({} bytes)", params.text.len());

        let stats = analyze(&params.text);
        let summary = format!(
            "{} words, {} characters, {} sentences, {} paragraphs. Reading time: {} min. Readability: {} ({}/100)",
            stats.words,
            stats.characters,
            stats.sentences,
            stats.paragraphs,
            stats.reading_time,
            stats.readability.level,
            stats.readability.score
        );
        structured_result(summary, &stats)
    }

    pub fn handle_json(arguments: Value) -> Result<Value, String> {
        let params: WordCounterParams = parse_json(arguments)?;
        Ok(to_json_response(Self::execute(&params)))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WordCounterParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |call: ToolCallContext<'_, S>| {
            let args = call.arguments.clone();
            async move {
                let params: WordCounterParams = parse_arguments(args)?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_counter() {
        let result = WordCounterTool::handle_json(serde_json::json!({
            "text": "One two three. Four five."
        }))
        .unwrap();
        assert_eq!(result["structuredContent"]["words"], 5);
        assert_eq!(result["structuredContent"]["sentences"], 2);
        assert_eq!(result["structuredContent"]["charactersNoSpaces"], 21);
    }

    #[test]
    fn test_missing_text_is_invalid() {
        assert!(WordCounterTool::handle_json(serde_json::json!({})).is_err());
    }
}
