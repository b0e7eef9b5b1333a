//! Catalog domain module.
//!
//! The catalog is the combined set of category and tool records. It is loaded
//! once at startup (from the built-in fixtures or a configured directory) and
//! only the per-tool usage counter changes afterwards.
//!
//! ## Architecture
//!
//! - `model.rs` - Category and tool records
//! - `store.rs` - In-memory store and load-time invariant checks
//! - `service.rs` - `QueryService` trait and its in-memory implementation
//! - `latency.rs` - Optional simulated network delay
//! - `error.rs` - Catalog error types

mod error;
pub mod latency;
pub mod model;
mod service;
pub mod store;

pub use error::{CatalogError, CatalogResult};
pub use latency::Latency;
pub use model::{Category, CategoryId, Tool, ToolId};
pub use service::{CatalogService, QueryService};
pub use store::CatalogStore;
