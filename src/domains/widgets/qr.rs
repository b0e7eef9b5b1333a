//! QR code generator.
//!
//! Nothing is encoded locally: the widget builds the image URL of an external
//! QR rendering service.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::error::{ValidationError, WidgetResult};

pub const MIN_SIZE: u32 = 128;
pub const MAX_SIZE: u32 = 512;
pub const DEFAULT_SIZE: u32 = 256;

/// Error correction level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ErrorCorrection {
    /// ~7% recovery
    L,
    /// ~15% recovery
    #[default]
    M,
    /// ~25% recovery
    Q,
    /// ~30% recovery
    H,
}

impl ErrorCorrection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        }
    }
}

/// Parameters of a QR image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrRequest {
    pub data: String,
    pub size: u32,
    pub ecc: ErrorCorrection,
    pub background: String,
    pub foreground: String,
}

impl QrRequest {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            size: DEFAULT_SIZE,
            ecc: ErrorCorrection::default(),
            background: "#ffffff".to_string(),
            foreground: "#000000".to_string(),
        }
    }
}

/// A rendered QR code reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCode {
    pub image_url: String,
    pub size: u32,
    pub ecc: ErrorCorrection,
}

#[derive(Serialize)]
struct QueryParams<'a> {
    data: &'a str,
    size: String,
    ecc: &'static str,
    bgcolor: &'a str,
    color: &'a str,
}

/// Build the image URL for `request` against `endpoint`.
pub fn build_url(endpoint: &str, request: &QrRequest) -> WidgetResult<QrCode> {
    if request.data.trim().is_empty() {
        return Err(ValidationError::new(
            "Please enter data to generate QR code",
        ));
    }
    if !(MIN_SIZE..=MAX_SIZE).contains(&request.size) {
        return Err(ValidationError::new(format!(
            "QR code size must be between {} and {} pixels",
            MIN_SIZE, MAX_SIZE
        )));
    }

    let params = QueryParams {
        data: &request.data,
        size: format!("{0}x{0}", request.size),
        ecc: request.ecc.as_str(),
        bgcolor: hex_color("background", &request.background)?,
        color: hex_color("foreground", &request.foreground)?,
    };
    let query = serde_urlencoded::to_string(&params)
        .map_err(|e| ValidationError::new(format!("Failed to generate QR code: {}", e)))?;

    let separator = if endpoint.contains('?') { '&' } else { '?' };
    Ok(QrCode {
        image_url: format!("{}{}{}", endpoint, separator, query),
        size: request.size,
        ecc: request.ecc,
    })
}

/// Validate a `#rrggbb` color and return it without the hash.
fn hex_color<'a>(field: &str, value: &'a str) -> WidgetResult<&'a str> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(hex)
    } else {
        Err(ValidationError::new(format!(
            "Invalid {} color '{}', expected #rrggbb",
            field, value
        )))
    }
}
