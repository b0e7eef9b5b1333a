//! HTTP transport implementation.
//!
//! JSON-RPC over POST, so plain HTTP clients (curl, a browser page) can
//! browse the catalog and run tools without an MCP client library. Every
//! request is answered with status 200; failures travel in the JSON-RPC
//! `error` member.

use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::ToolboxServer;
use crate::domains::tools::ToolError;

const PROTOCOL_VERSION: &str = "2024-11-05";

const INVALID_REQUEST: i32 = -32600;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;
const INTERNAL_ERROR: i32 = -32603;
const RESOURCE_NOT_FOUND: i32 = -32002;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(INVALID_PARAMS, message)
    }
}

impl From<ToolError> for JsonRpcError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::NotFound(_) => Self::new(METHOD_NOT_FOUND, err.to_string()),
            ToolError::InvalidArguments(_) => Self::invalid_params(err.to_string()),
        }
    }
}

impl JsonRpcResponse {
    fn reply(id: Option<Value>, outcome: Result<Value, JsonRpcError>) -> Self {
        let (result, error) = match outcome {
            Ok(value) => (Some(value), None),
            Err(e) => (None, Some(e)),
        };
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result,
            error,
        }
    }
}

type RpcResult = Result<Value, JsonRpcError>;

/// Application state shared across HTTP handlers.
#[derive(Clone)]
struct AppState {
    server: ToolboxServer,
    rpc_path: String,
    /// Set once the client has sent `notifications/initialized`.
    initialized: Arc<AtomicBool>,
}

impl HttpTransport {
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Serve until Ctrl-C.
    pub async fn run(self, server: ToolboxServer) -> TransportResult<()> {
        let addr = self.address();
        let app = router(server, &self.config);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "Ready - listening on {} (JSON-RPC over HTTP, CORS {})",
            addr,
            if self.config.enable_cors {
                "enabled"
            } else {
                "disabled"
            }
        );
        info!("  → JSON-RPC: POST {}", self.config.rpc_path);
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                if tokio::signal::ctrl_c().await.is_ok() {
                    info!("Shutdown requested");
                }
            })
            .await
            .map_err(|e| TransportError::service(e.to_string()))
    }
}

fn router(server: ToolboxServer, config: &HttpConfig) -> Router {
    let state = AppState {
        server,
        rpc_path: config.rpc_path.clone(),
        initialized: Arc::new(AtomicBool::new(false)),
    };

    let app = Router::new()
        .route(&config.rpc_path, post(handle_rpc))
        .route("/health", get(health_check))
        .route("/", get(root_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if config.enable_cors {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        app
    }
}

/// API summary for humans poking at the root URL.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "HTTP",
        "endpoints": {
            "rpc": state.rpc_path,
            "health": "/health"
        },
        "protocol": "JSON-RPC 2.0"
    }))
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> Json<JsonRpcResponse> {
    tracing::Span::current().record("method", request.method.as_str());
    Json(process_request(&state, request).await)
}

async fn process_request(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    if request.jsonrpc != "2.0" {
        return JsonRpcResponse::reply(
            request.id,
            Err(JsonRpcError::new(INVALID_REQUEST, "Invalid Request")),
        );
    }

    let server = &state.server;
    let params = request.params.unwrap_or(Value::Null);

    let outcome = match request.method.as_str() {
        "initialize" => Ok(initialize(server)),
        "tools/list" => Ok(serde_json::json!({ "tools": server.list_tools() })),
        "tools/call" => call_tool(server, params).await,
        "resources/list" => Ok(serde_json::json!({ "resources": server.list_resources().await })),
        "resources/templates/list" => Ok(serde_json::json!({
            "resourceTemplates": server.list_resource_templates().await
        })),
        "resources/read" => read_resource(server, params).await,
        method if method.starts_with("notifications/") => {
            if method == "notifications/initialized" {
                state.initialized.store(true, Ordering::SeqCst);
                info!("Client sent initialized notification");
            } else {
                debug!("Ignoring notification: {}", method);
            }
            Ok(Value::Null)
        }
        method => {
            warn!("Unknown method: {}", method);
            Err(JsonRpcError::new(METHOD_NOT_FOUND, "Method not found"))
        }
    };

    JsonRpcResponse::reply(request.id, outcome)
}

fn initialize(server: &ToolboxServer) -> Value {
    serde_json::json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {},
            "resources": {}
        },
        "serverInfo": {
            "name": server.name(),
            "version": server.version()
        },
        "instructions": server.instructions()
    })
}

fn required_str<'a>(params: &'a Value, key: &str) -> Result<&'a str, JsonRpcError> {
    params
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| JsonRpcError::invalid_params(format!("Missing '{}'", key)))
}

async fn call_tool(server: &ToolboxServer, params: Value) -> RpcResult {
    let name = required_str(&params, "name")?;
    let arguments = params
        .get("arguments")
        .cloned()
        .unwrap_or_else(|| serde_json::json!({}));

    info!("Calling tool {}", name);
    Ok(server.call_tool(name, arguments).await?)
}

async fn read_resource(server: &ToolboxServer, params: Value) -> RpcResult {
    let uri = required_str(&params, "uri")?;

    server.read_resource(uri).await.map_err(|e| {
        let code = if e.is_not_found() {
            RESOURCE_NOT_FOUND
        } else {
            INTERNAL_ERROR
        };
        JsonRpcError::new(code, e.to_string())
    })
}
