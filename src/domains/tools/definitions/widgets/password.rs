//! Password generator tool definition.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use serde_json::Value;
use tracing::{info, instrument};

use crate::domains::tools::definitions::common::{
    parse_arguments, parse_json, structured_result, to_json_response, validation_result,
};
use crate::domains::widgets::password::{MAX_SCORE, PasswordOptions, generate};

/// Password generator tool - random password plus a strength rating.
pub struct PasswordGeneratorTool;

impl PasswordGeneratorTool {
    pub const NAME: &'static str = "password_generator";

    pub const DESCRIPTION: &'static str = "Generate a random password (4-50 characters, default 12) from the selected character classes, optionally excluding look-alike characters, and rate its strength.";

    #[instrument(skip_all, fields(length = params.length))]
    pub fn execute(params: &PasswordOptions) -> CallToolResult {
        info!("Password generator tool called");

        match generate(params) {
            Ok(generated) => {
                let summary = format!(
                    "{}\nStrength: {} ({}/{})",
                    generated.password,
                    generated.strength.label,
                    generated.strength.score,
                    MAX_SCORE
                );
                structured_result(summary, &generated)
            }
            Err(e) => validation_result(&e),
        }
    }

    pub fn handle_json(arguments: Value) -> Result<Value, String> {
        let params: PasswordOptions = parse_json(arguments)?;
        Ok(to_json_response(Self::execute(&params)))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<PasswordOptions>(),
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
                let params: PasswordOptions = parse_arguments(args)?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}
