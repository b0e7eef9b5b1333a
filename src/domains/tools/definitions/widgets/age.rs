//! Age calculator tool definition.

use chrono::Local;
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
    parse_arguments, parse_json, structured_result, to_json_response, validation_result,
};
use crate::domains::widgets::age::{calculate_age, parse_date};

/// Parameters for the age calculator.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AgeCalculatorParams {
    /// Date of birth, YYYY-MM-DD.
    pub birth_date: String,

    /// Date to measure the age at, YYYY-MM-DD. Defaults to today.
    #[serde(default)]
    pub target_date: Option<String>,
}

/// Age calculator tool - exact age, totals, next birthday and zodiac sign.
pub struct AgeCalculatorTool;

impl AgeCalculatorTool {
    pub const NAME: &'static str = "age_calculator";

    pub const DESCRIPTION: &'static str = "Calculate exact age in years, months and days between a birth date and a target date (default today), with totals, next birthday countdown, zodiac sign and age on other planets.";

    #[instrument(skip_all, fields(birth_date = %params.birth_date))]
    pub fn execute(params: &AgeCalculatorParams) -> CallToolResult {
        info!("Age calculator tool called");

        let birth = match parse_date("birth date", &params.birth_date) {
            Ok(d) => d,
            Err(e) => return validation_result(&e),
        };
        let target = match params.target_date.as_deref() {
            Some(value) => match parse_date("target date", value) {
                Ok(d) => d,
                Err(e) => return validation_result(&e),
            },
            None => Local::now().date_naive(),
        };

        match calculate_age(birth, target) {
            Ok(report) => {
                let summary = format!(
                    "{} years, {} months, {} days old ({} days). Next birthday in {} days, on {}. Zodiac: {:?}",
                    report.years,
                    report.months,
                    report.days,
                    report.total_days,
                    report.days_until_birthday,
                    report.next_birthday,
                    report.zodiac_sign
                );
                structured_result(summary, &report)
            }
            Err(e) => validation_result(&e),
        }
    }

    pub fn handle_json(arguments: Value) -> Result<Value, String> {
        let params: AgeCalculatorParams = parse_json(arguments)?;
        Ok(to_json_response(Self::execute(&params)))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AgeCalculatorParams>(),
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
                let params: AgeCalculatorParams = parse_arguments(args)?;
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
    fn test_age_with_target() {
        let params = AgeCalculatorParams {
            birth_date: "2000-01-01".to_string(),
            target_date: Some("2020-01-01".to_string()),
        };
        let result = AgeCalculatorTool::execute(&params);
        assert_eq!(result.is_error, Some(false));
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["years"], 20);
        assert_eq!(structured["zodiac_sign"], "Capricorn");
    }

    #[test]
    fn test_defaults_to_today() {
        let params = AgeCalculatorParams {
            birth_date: "1990-06-15".to_string(),
            target_date: None,
        };
        assert_eq!(AgeCalculatorTool::execute(&params).is_error, Some(false));
    }

    #[test]
    fn test_birth_after_target() {
        let result = AgeCalculatorTool::handle_json(serde_json::json!({
            "birth_date": "2030-01-01",
            "target_date": "2020-01-01"
        }))
        .unwrap();
        assert_eq!(result["isError"], true);
    }

    #[test]
    fn test_bad_date_format() {
        let params = AgeCalculatorParams {
            birth_date: "01/01/2000".to_string(),
            target_date: None,
        };
        assert_eq!(AgeCalculatorTool::execute(&params).is_error, Some(true));
    }
}
