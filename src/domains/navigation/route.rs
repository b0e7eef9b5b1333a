//! Route parsing.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domains::catalog::{CategoryId, ToolId};

/// A location in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    About,
    Privacy,
    Disclaimer,
    Terms,
    Contact,
    Category(CategoryId),
    Tool(ToolId),
    Search { query: String },
    NotFound(String),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

impl Route {
    /// Resolve a path such as `/tool/11` or `/search?q=pdf`.
    ///
    /// Anything unrecognised, including a non-numeric id, is `NotFound`.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let (path, query) = match input.split_once('?') {
            Some((path, query)) => (path, query),
            None => (input, ""),
        };
        let path = path.trim_end_matches('/');
        let segments: Vec<&str> = path
            .strip_prefix('/')
            .unwrap_or(path)
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["about"] => Self::About,
            ["privacy"] => Self::Privacy,
            ["disclaimer"] => Self::Disclaimer,
            ["terms"] => Self::Terms,
            ["contact"] => Self::Contact,
            ["category", id] => id
                .parse()
                .map(Self::Category)
                .unwrap_or_else(|_| Self::NotFound(input.to_string())),
            ["tool", id] => id
                .parse()
                .map(Self::Tool)
                .unwrap_or_else(|_| Self::NotFound(input.to_string())),
            ["search"] => {
                let params: SearchQuery = serde_urlencoded::from_str(query).unwrap_or_default();
                Self::Search { query: params.q }
            }
            _ => Self::NotFound(input.to_string()),
        }
    }

    /// Title of the static pages; `None` for data-backed routes.
    pub fn static_title(&self) -> Option<&'static str> {
        match self {
            Self::About => Some("About Us"),
            Self::Privacy => Some("Privacy Policy"),
            Self::Disclaimer => Some("Disclaimer"),
            Self::Terms => Some("Terms & Conditions"),
            Self::Contact => Some("Contact Us"),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("/"),
            Self::About => f.write_str("/about"),
            Self::Privacy => f.write_str("/privacy"),
            Self::Disclaimer => f.write_str("/disclaimer"),
            Self::Terms => f.write_str("/terms"),
            Self::Contact => f.write_str("/contact"),
            Self::Category(id) => write!(f, "/category/{}", id),
            Self::Tool(id) => write!(f, "/tool/{}", id),
            Self::Search { query } if query.is_empty() => f.write_str("/search"),
            Self::Search { query } => {
                let encoded = serde_urlencoded::to_string(SearchQuery { q: query.clone() })
                    .map_err(|_| fmt::Error)?;
                write!(f, "/search?{}", encoded)
            }
            Self::NotFound(path) => f.write_str(path),
        }
    }
}

impl Serialize for Route {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/about/"), Route::About);
        assert_eq!(Route::parse("/terms"), Route::Terms);
        assert_eq!(Route::Terms.static_title(), Some("Terms & Conditions"));
    }

    #[test]
    fn test_id_routes() {
        assert_eq!(Route::parse("/category/3"), Route::Category(CategoryId(3)));
        assert_eq!(Route::parse("tool/11/"), Route::Tool(ToolId(11)));
    }

    #[test]
    fn test_non_numeric_id_is_not_found() {
        assert_eq!(
            Route::parse("/tool/abc"),
            Route::NotFound("/tool/abc".to_string())
        );
        assert!(matches!(Route::parse("/category/-1"), Route::NotFound(_)));
    }

    #[test]
    fn test_search_query_is_decoded() {
        assert_eq!(
            Route::parse("/search?q=pdf+to%20word"),
            Route::Search {
                query: "pdf to word".to_string()
            }
        );
        assert_eq!(
            Route::parse("/search"),
            Route::Search {
                query: String::new()
            }
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Route::Tool(ToolId(7)).to_string(), "/tool/7");
        let search = Route::Search {
            query: "json & xml".to_string(),
        };
        assert_eq!(search.to_string(), "/search?q=json+%26+xml");
        assert_eq!(Route::parse(&search.to_string()), search);
    }

    #[test]
    fn test_unknown_path() {
        assert!(matches!(Route::parse("/tools/all"), Route::NotFound(_)));
    }
}
