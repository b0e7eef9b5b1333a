//! JSON formatter, minifier and validator.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

use super::error::{ValidationError, WidgetResult};

pub const MIN_INDENT: usize = 1;
pub const MAX_INDENT: usize = 8;
pub const DEFAULT_INDENT: usize = 2;

/// Operations offered by the formatter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum JsonAction {
    #[default]
    Format,
    Minify,
    Validate,
}

impl JsonAction {
    fn verb(self) -> &'static str {
        match self {
            Self::Format => "format",
            Self::Minify => "minify",
            Self::Validate => "validate",
        }
    }
}

fn parse(input: &str, action: JsonAction) -> WidgetResult<Value> {
    if input.trim().is_empty() {
        return Err(ValidationError::new(format!(
            "Please enter JSON data to {}",
            action.verb()
        )));
    }
    serde_json::from_str(input).map_err(|e| ValidationError::new(format!("Invalid JSON: {}", e)))
}

/// Pretty-print `input` with `indent` spaces per level, keeping key order.
pub fn format(input: &str, indent: usize) -> WidgetResult<String> {
    if !(MIN_INDENT..=MAX_INDENT).contains(&indent) {
        return Err(ValidationError::new(format!(
            "Indent size must be between {} and {}",
            MIN_INDENT, MAX_INDENT
        )));
    }

    let value = parse(input, JsonAction::Format)?;
    let indent = " ".repeat(indent);
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| ValidationError::new(format!("Invalid JSON: {}", e)))?;

    String::from_utf8(out).map_err(|e| ValidationError::new(e.to_string()))
}

/// Strip all insignificant whitespace from `input`.
pub fn minify(input: &str) -> WidgetResult<String> {
    let value = parse(input, JsonAction::Minify)?;
    serde_json::to_string(&value).map_err(|e| ValidationError::new(format!("Invalid JSON: {}", e)))
}

/// Check that `input` parses.
pub fn validate(input: &str) -> WidgetResult<()> {
    parse(input, JsonAction::Validate).map(|_| ())
}

/// Formatter state across several actions.
///
/// A failed action records its error but leaves the last good output in place.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatterSession {
    output: Option<String>,
    error: Option<ValidationError>,
}

impl JsonFormatterSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `action` over `input` and update the session.
    pub fn apply(&mut self, action: JsonAction, input: &str, indent: usize) -> WidgetResult<()> {
        let result = match action {
            JsonAction::Format => format(input, indent).map(Some),
            JsonAction::Minify => minify(input).map(Some),
            JsonAction::Validate => validate(input).map(|_| None),
        };

        match result {
            Ok(output) => {
                if let Some(output) = output {
                    self.output = Some(output);
                }
                self.error = None;
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn clear(&mut self) {
        self.output = None;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_default_indent() {
        let out = format(r#"{"b":1,"a":[1,2]}"#, DEFAULT_INDENT).unwrap();
        assert_eq!(out, "{\n  \"b\": 1,\n  \"a\": [\n    1,\n    2\n  ]\n}");
    }

    #[test]
    fn test_format_custom_indent() {
        let out = format(r#"{"a":true}"#, 4).unwrap();
        assert_eq!(out, "{\n    \"a\": true\n}");
    }

    #[test]
    fn test_indent_out_of_range() {
        assert!(format("{}", 0).is_err());
        assert!(format("{}", 9).is_err());
    }

    #[test]
    fn test_minify_keeps_key_order() {
        let out = minify("{ \"z\": 1,\n \"a\": { \"y\": null } }").unwrap();
        assert_eq!(out, r#"{"z":1,"a":{"y":null}}"#);
    }

    #[test]
    fn test_simple_object_formats_minifies_and_rejects_bare_keys() {
        let formatted = format(r#"{"a":1}"#, 2).unwrap();
        let reparsed: serde_json::Value = serde_json::from_str(&formatted).unwrap();
        assert_eq!(reparsed, serde_json::json!({ "a": 1 }));

        assert_eq!(minify(r#"{"a":1}"#).unwrap(), r#"{"a":1}"#);

        let mut session = JsonFormatterSession::new();
        session.apply(JsonAction::Format, r#"{"a":1}"#, 2).unwrap();
        let before = session.output().map(str::to_string);
        assert!(session.apply(JsonAction::Format, "{a:1}", 2).is_err());
        assert_eq!(session.output().map(str::to_string), before);
    }

    #[test]
    fn test_blank_input() {
        let err = validate("   ").unwrap_err();
        assert_eq!(err.message(), "Please enter JSON data to validate");
    }

    #[test]
    fn test_invalid_json_carries_parser_message() {
        let err = minify("{\"a\":}").unwrap_err();
        assert!(err.message().starts_with("Invalid JSON: "));
        assert!(err.message().contains("line 1"));
    }

    #[test]
    fn test_session_keeps_output_on_failure() {
        let mut session = JsonFormatterSession::new();
        session.apply(JsonAction::Minify, "[1, 2]", 2).unwrap();
        assert_eq!(session.output(), Some("[1,2]"));

        assert!(session.apply(JsonAction::Format, "[1,", 2).is_err());
        assert_eq!(session.output(), Some("[1,2]"));
        assert!(session.error().is_some());

        session.apply(JsonAction::Validate, "{}", 2).unwrap();
        assert_eq!(session.output(), Some("[1,2]"));
        assert!(session.error().is_none());

        session.clear();
        assert!(session.output().is_none());
    }
}
