//! Unit converter tool definition.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};

use crate::domains::tools::definitions::common::{
    parse_arguments, parse_json, structured_result, to_json_response, validation_result,
};
use crate::domains::widgets::units::{UnitCategory, convert, format_value};

/// Parameters for the unit converter.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UnitConverterParams {
    /// Measurement family.
    pub category: UnitCategory,

    /// Value to convert.
    pub value: f64,

    /// Source unit key, e.g. "meter", "fahrenheit", "squareFoot".
    pub from: String,

    /// Target unit key.
    pub to: String,
}

#[derive(Debug, Serialize)]
struct Conversion<'a> {
    category: UnitCategory,
    value: f64,
    from: &'a str,
    to: &'a str,
    result: f64,
    display: String,
}

/// Unit converter tool - length, weight, temperature, area, volume and speed.
pub struct UnitConverterTool;

impl UnitConverterTool {
    pub const NAME: &'static str = "unit_converter";

    pub const DESCRIPTION: &'static str = "Convert a value between units of length, weight, temperature, area, volume or speed.";

    #[instrument(skip_all, fields(category = ?params.category))]
    pub fn execute(params: &UnitConverterParams) -> CallToolResult {
        info!("Unit converter tool called: {} -> {}", params.from, params.to);

        let result = match convert(params.category, params.value, &params.from, &params.to) {
            Ok(r) => r,
            Err(e) => return validation_result(&e),
        };

        let display = format_value(result);
        let summary = format!(
            "{} {} = {} {}",
            format_value(params.value),
            params.from,
            display,
            params.to
        );
        let conversion = Conversion {
            category: params.category,
            value: params.value,
            from: &params.from,
            to: &params.to,
            result,
            display,
        };
        structured_result(summary, &conversion)
    }

    pub fn handle_json(arguments: Value) -> Result<Value, String> {
        let params: UnitConverterParams = parse_json(arguments)?;
        Ok(to_json_response(Self::execute(&params)))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UnitConverterParams>(),
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
                let params: UnitConverterParams = parse_arguments(args)?;
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
    fn test_convert_temperature() {
        let result = UnitConverterTool::handle_json(serde_json::json!({
            "category": "temperature",
            "value": 100,
            "from": "celsius",
            "to": "fahrenheit"
        }))
        .unwrap();
        assert_eq!(result["isError"], false);
        assert_eq!(result["structuredContent"]["display"], "212");
    }

    #[test]
    fn test_unknown_unit_is_error() {
        let params = UnitConverterParams {
            category: UnitCategory::Length,
            value: 1.0,
            from: "parsec".to_string(),
            to: "meter".to_string(),
        };
        assert_eq!(UnitConverterTool::execute(&params).is_error, Some(true));
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!(
            UnitConverterTool::handle_json(serde_json::json!({
                "category": "time", "value": 1, "from": "second", "to": "minute"
            }))
            .is_err()
        );
    }
}
