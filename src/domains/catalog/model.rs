//! Catalog records.
//!
//! Field names follow the dataset fixtures: ids serialize as `Id`, the rest
//! in camelCase.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Stable identifier of a category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct CategoryId(pub u32);

/// Stable identifier of a tool.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct ToolId(pub u32);

macro_rules! impl_id {
    ($name:ident) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }
    };
}

impl_id!(CategoryId);
impl_id!(ToolId);

/// A group of related tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "Id")]
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    /// Symbolic pictogram name, passed through to the renderer untouched.
    pub icon: String,
    /// Display color token.
    pub color: String,
    /// Number of tools in this category.
    #[serde(default)]
    pub tool_count: u32,
}

/// A single utility tool listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    #[serde(rename = "Id")]
    pub id: ToolId,
    pub category_id: CategoryId,
    pub name: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub usage_count: u64,
    #[serde(default)]
    pub featured: bool,
    /// Whether a working widget exists, as opposed to a "coming soon" placeholder.
    #[serde(default)]
    pub implemented: bool,
}

impl Tool {
    /// Case-insensitive substring match on name or description.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_deserializes_fixture_fields() {
        let json = r#"{
            "Id": 7,
            "categoryId": 2,
            "name": "Image Compressor",
            "description": "Compress images",
            "icon": "Minimize2",
            "usageCount": 12,
            "featured": true,
            "implemented": true
        }"#;
        let tool: Tool = serde_json::from_str(json).unwrap();
        assert_eq!(tool.id, ToolId(7));
        assert_eq!(tool.category_id, CategoryId(2));
        assert_eq!(tool.usage_count, 12);

        let back = serde_json::to_value(&tool).unwrap();
        assert_eq!(back["Id"], 7);
        assert_eq!(back["categoryId"], 2);
    }

    #[test]
    fn test_id_from_str() {
        assert_eq!("42".parse::<ToolId>().unwrap(), ToolId(42));
        assert!("abc".parse::<CategoryId>().is_err());
        assert!("-1".parse::<CategoryId>().is_err());
    }

    #[test]
    fn test_tool_matches_name_or_description() {
        let tool = Tool {
            id: ToolId(1),
            category_id: CategoryId(1),
            name: "PDF to Word".to_string(),
            description: "Convert documents to DOCX".to_string(),
            icon: "FileText".to_string(),
            usage_count: 0,
            featured: false,
            implemented: true,
        };
        assert!(tool.matches("pdf"));
        assert!(tool.matches("docx"));
        assert!(!tool.matches("image"));
    }
}
