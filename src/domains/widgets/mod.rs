//! Tool widgets domain module.
//!
//! A widget is the interactive part of a tool page. Widgets hold no state of
//! their own beyond a single invocation and report bad input as
//! [`ValidationError`] rather than failing the page.
//!
//! ## Architecture
//!
//! - `age.rs` - Age calculator
//! - `units.rs` - Unit converter
//! - `password.rs` - Password generator
//! - `json_format.rs` - JSON formatter, minifier and validator
//! - `word_count.rs` - Word counter and readability
//! - `qr.rs` - QR code image URL builder
//! - `simulated.rs` - Mocked file conversions

pub mod age;
mod error;
pub mod json_format;
pub mod password;
pub mod qr;
pub mod simulated;
pub mod units;
pub mod word_count;

use serde::Serialize;

use crate::domains::catalog::ToolId;

pub use error::{ValidationError, WidgetResult};

/// Widgets wired to catalog tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    PdfToWord,
    PdfToJpg,
    JpgToPdf,
    ImageCompressor,
    QrCodeGenerator,
    PasswordGenerator,
    WordCounter,
    JsonFormatter,
    AgeCalculator,
    UnitConverter,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 10] = [
        Self::PdfToWord,
        Self::PdfToJpg,
        Self::JpgToPdf,
        Self::ImageCompressor,
        Self::QrCodeGenerator,
        Self::PasswordGenerator,
        Self::WordCounter,
        Self::JsonFormatter,
        Self::AgeCalculator,
        Self::UnitConverter,
    ];

    /// The widget mounted on a tool's page, if any.
    pub fn for_tool(id: ToolId) -> Option<Self> {
        let kind = match id.0 {
            1 => Self::PdfToWord,
            3 => Self::PdfToJpg,
            4 => Self::JpgToPdf,
            7 => Self::ImageCompressor,
            10 => Self::QrCodeGenerator,
            11 => Self::PasswordGenerator,
            12 => Self::WordCounter,
            15 => Self::JsonFormatter,
            17 => Self::AgeCalculator,
            19 => Self::UnitConverter,
            _ => return None,
        };
        Some(kind)
    }

    /// Catalog tool this widget belongs to.
    pub fn tool_id(self) -> ToolId {
        let id = match self {
            Self::PdfToWord => 1,
            Self::PdfToJpg => 3,
            Self::JpgToPdf => 4,
            Self::ImageCompressor => 7,
            Self::QrCodeGenerator => 10,
            Self::PasswordGenerator => 11,
            Self::WordCounter => 12,
            Self::JsonFormatter => 15,
            Self::AgeCalculator => 17,
            Self::UnitConverter => 19,
        };
        ToolId(id)
    }

    /// Name of the MCP tool that drives this widget.
    pub fn mcp_tool(self) -> &'static str {
        match self {
            Self::PdfToWord => "pdf_to_word",
            Self::PdfToJpg => "pdf_to_jpg",
            Self::JpgToPdf => "jpg_to_pdf",
            Self::ImageCompressor => "image_compressor",
            Self::QrCodeGenerator => "qr_code_generator",
            Self::PasswordGenerator => "password_generator",
            Self::WordCounter => "word_counter",
            Self::JsonFormatter => "json_formatter",
            Self::AgeCalculator => "age_calculator",
            Self::UnitConverter => "unit_converter",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_mapping_round_trips() {
        for kind in WidgetKind::ALL {
            assert_eq!(WidgetKind::for_tool(kind.tool_id()), Some(kind));
        }
    }

    #[test]
    fn test_unwired_tools() {
        assert_eq!(WidgetKind::for_tool(ToolId(2)), None);
        assert_eq!(WidgetKind::for_tool(ToolId(18)), None);
    }
}
