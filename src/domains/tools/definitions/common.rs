//! Common helpers shared by the tool definitions.
//!
//! Result construction, argument parsing and the JSON shape returned over
//! HTTP all live here so every tool answers the same way.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject},
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::core::security::PathSecurityError;
use crate::domains::widgets::ValidationError;

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Report bad widget input back to the caller.
pub fn validation_result(error: &ValidationError) -> CallToolResult {
    error_result(error.message())
}

/// Report a rejected input file.
pub fn path_error_result(error: &PathSecurityError) -> CallToolResult {
    error_result(&format!("Path security validation failed: {}", error))
}

/// Create a success result carrying a text summary and structured data.
pub fn structured_result<T: Serialize>(summary: String, data: &T) -> CallToolResult {
    match serde_json::to_value(data) {
        Ok(structured) => CallToolResult {
            content: vec![Content::text(summary)],
            structured_content: Some(structured),
            is_error: Some(false),
            meta: None,
        },
        Err(e) => {
            warn!("Failed to serialize structured content: {}", e);
            CallToolResult::success(vec![Content::text(summary)])
        }
    }
}

/// Deserialize rmcp call arguments into a parameter struct.
pub fn parse_arguments<P: DeserializeOwned>(args: Option<JsonObject>) -> Result<P, McpError> {
    let args = args.unwrap_or_default();
    serde_json::from_value(Value::Object(args))
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

/// Deserialize raw JSON-RPC arguments into a parameter struct.
pub fn parse_json<P: DeserializeOwned>(arguments: Value) -> Result<P, String> {
    let arguments = match arguments {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {}", e))
}

/// JSON body of a `tools/call` answer.
pub fn to_json_response(result: CallToolResult) -> Value {
    let mut response = serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    });

    if let (Some(structured), Some(object)) =
        (result.structured_content, response.as_object_mut())
    {
        object.insert("structuredContent".to_string(), structured);
    }

    response
}
