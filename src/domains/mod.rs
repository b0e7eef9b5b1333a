//! Domains module containing business logic organized by bounded contexts.
//!
//! - `catalog` - category and tool records and the query service over them
//! - `navigation` - routes, view slots and page loading
//! - `widgets` - the interactive tool logic, independent of MCP
//! - `tools` - MCP tools wrapping navigation and widgets
//! - `resources` - MCP resources exposing catalog queries

pub mod catalog;
pub mod navigation;
pub mod resources;
pub mod tools;
pub mod widgets;
