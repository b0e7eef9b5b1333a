//! Parsing of `catalog://` resource URIs.

use std::collections::HashMap;

use crate::domains::catalog::{CategoryId, ToolId};
use crate::domains::resources::ResourceError;

const SCHEME: &str = "catalog://";

/// A catalog query addressed by a resource URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogUri {
    Categories,
    Category(CategoryId),
    CategoryTools(CategoryId),
    Tools,
    FeaturedTools,
    Tool(ToolId),
    Search(String),
}

impl CatalogUri {
    pub fn parse(uri: &str) -> Result<Self, ResourceError> {
        let path = uri
            .strip_prefix(SCHEME)
            .ok_or_else(|| ResourceError::invalid_uri(uri))?;
        let segments: Vec<&str> = path.trim_end_matches('/').split('/').collect();

        let parsed = match segments.as_slice() {
            ["categories"] => Self::Categories,
            ["categories", id] => Self::Category(parse_id(uri, id)?),
            ["categories", id, "tools"] => Self::CategoryTools(parse_id(uri, id)?),
            ["tools"] => Self::Tools,
            ["tools", "featured"] => Self::FeaturedTools,
            ["tools", id] => Self::Tool(parse_id(uri, id)?),
            ["search", query] => Self::Search(decode_segment(uri, query)?),
            _ => return Err(ResourceError::not_found(uri)),
        };
        Ok(parsed)
    }
}

fn parse_id<T: std::str::FromStr>(uri: &str, segment: &str) -> Result<T, ResourceError> {
    segment
        .parse()
        .map_err(|_| ResourceError::invalid_uri(uri))
}

/// Percent-decode one path segment.
fn decode_segment(uri: &str, segment: &str) -> Result<String, ResourceError> {
    let pairs: HashMap<String, String> = serde_urlencoded::from_str(&format!("q={}", segment))
        .map_err(|_| ResourceError::invalid_uri(uri))?;
    Ok(pairs.get("q").cloned().unwrap_or_default())
}
