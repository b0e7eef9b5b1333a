//! Navigation domain module.
//!
//! Turns a location such as `/category/3` into a loaded page. Each
//! data-backed view tracks its own load state and ignores results from loads
//! it has since superseded.
//!
//! ## Architecture
//!
//! - `route.rs` - Path parsing
//! - `view.rs` - `ViewState` and generation-checked `ViewSlot`
//! - `pages.rs` - Page payloads and their catalog loaders
//! - `navigator.rs` - Current location, view slots and search suggestions

mod navigator;
pub mod pages;
mod route;
pub mod view;

pub use navigator::{Navigator, Page, PageView, SUGGEST_LIMIT, SUGGEST_MIN_CHARS};
pub use pages::{Suggestion, WidgetAvailability};
pub use route::Route;
pub use view::{LoadTicket, ViewSlot, ViewState};
