//! Interactive widget tools.

pub mod age;
pub mod json_format;
pub mod password;
pub mod qr;
pub mod units;
pub mod word_count;

pub use age::{AgeCalculatorParams, AgeCalculatorTool};
pub use json_format::{JsonFormatterParams, JsonFormatterTool};
pub use password::PasswordGeneratorTool;
pub use qr::{QrCodeGeneratorTool, QrCodeParams};
pub use units::{UnitConverterParams, UnitConverterTool};
pub use word_count::{WordCounterParams, WordCounterTool};
