//! Simulated file conversion tools.
//!
//! Inputs are local files (plain paths or `file://` URIs) checked against the
//! configured root directory before anything else happens.

pub mod image_compressor;
pub mod jpg_to_pdf;
pub mod pdf_to_jpg;
pub mod pdf_to_word;

pub use image_compressor::{ImageCompressorParams, ImageCompressorTool};
pub use jpg_to_pdf::{JpgToPdfParams, JpgToPdfTool};
pub use pdf_to_jpg::{PdfToJpgParams, PdfToJpgTool};
pub use pdf_to_word::{PdfToWordParams, PdfToWordTool};

use rmcp::model::CallToolResult;
use tracing::warn;

use crate::core::config::SecurityConfig;
use crate::core::security::validate_path;
use crate::domains::tools::definitions::common::{error_result, path_error_result};
use crate::domains::widgets::simulated::SourceFile;

/// Validate `path` and read its size, or produce the error to return.
async fn open_source(path: &str, security: &SecurityConfig) -> Result<SourceFile, CallToolResult> {
    let canonical = validate_path(path, security).map_err(|e| {
        warn!("Rejected input file {}: {}", path, e);
        path_error_result(&e)
    })?;

    SourceFile::inspect(&canonical)
        .await
        .map_err(|e| error_result(&format!("Failed to read '{}': {}", path, e)))
}
