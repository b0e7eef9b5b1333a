//! QR code generator tool definition.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::config::Config;
use crate::domains::tools::definitions::common::{
    parse_arguments, parse_json, structured_result, to_json_response, validation_result,
};
use crate::domains::widgets::qr::{DEFAULT_SIZE, ErrorCorrection, QrRequest, build_url};

fn default_size() -> u32 {
    DEFAULT_SIZE
}

fn default_background() -> String {
    "#ffffff".to_string()
}

fn default_foreground() -> String {
    "#000000".to_string()
}

/// Parameters for the QR code generator.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct QrCodeParams {
    /// Text, URL, mailto:, tel:, WIFI: or vCard payload to encode.
    pub data: String,

    /// Image edge in pixels (128-512, default 256).
    #[serde(default = "default_size")]
    pub size: u32,

    /// Error correction level L, M (default), Q or H.
    #[serde(default)]
    pub ecc: ErrorCorrection,

    /// Background color, #rrggbb.
    #[serde(default = "default_background")]
    pub background: String,

    /// Foreground color, #rrggbb.
    #[serde(default = "default_foreground")]
    pub foreground: String,
}

/// QR code tool - builds a QR image URL.
pub struct QrCodeGeneratorTool;

impl QrCodeGeneratorTool {
    pub const NAME: &'static str = "qr_code_generator";

    pub const DESCRIPTION: &'static str = "Create a QR code image URL for text, links, contacts or WiFi credentials, with custom size, error correction and colors.";

    #[instrument(skip_all, fields(size = params.size))]
    pub fn execute(params: &QrCodeParams, config: &Config) -> CallToolResult {
        info!("QR code generator tool called");

        let request = QrRequest {
            data: params.data.clone(),
            size: params.size,
            ecc: params.ecc,
            background: params.background.clone(),
            foreground: params.foreground.clone(),
        };

        match build_url(&config.widgets.qr_endpoint, &request) {
            Ok(code) => structured_result(code.image_url.clone(), &code),
            Err(e) => validation_result(&e),
        }
    }

    pub fn handle_json(arguments: Value, config: Arc<Config>) -> Result<Value, String> {
        let params: QrCodeParams = parse_json(arguments)?;
        Ok(to_json_response(Self::execute(&params, &config)))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<QrCodeParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |call: ToolCallContext<'_, S>| {
            let args = call.arguments.clone();
            let config = config.clone();
            async move {
                let params: QrCodeParams = parse_arguments(args)?;
                Ok(Self::execute(&params, &config))
            }
            .boxed()
        })
    }
}
