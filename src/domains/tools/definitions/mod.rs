//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file, grouped by what it works on.

pub mod catalog;
pub mod common;
pub mod convert;
pub mod widgets;

pub use catalog::{CatalogSuggestTool, NavigateTool};
pub use convert::{ImageCompressorTool, JpgToPdfTool, PdfToJpgTool, PdfToWordTool};
pub use widgets::{
    AgeCalculatorTool, JsonFormatterTool, PasswordGeneratorTool, QrCodeGeneratorTool,
    UnitConverterTool, WordCounterTool,
};
