//! Location tracking and view loading.

use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, instrument};

use super::pages::{
    self, CategoryPage, HomePage, SearchPage, StaticPage, Suggestion, ToolPage,
};
use super::route::Route;
use super::view::{ViewData, ViewSlot, ViewState};
use crate::domains::catalog::{CatalogResult, QueryService};

/// Shortest query that produces suggestions.
pub const SUGGEST_MIN_CHARS: usize = 2;

/// Most suggestions returned at once.
pub const SUGGEST_LIMIT: usize = 5;

/// What a location currently shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum PageView {
    Home(ViewState<HomePage>),
    Category(ViewState<CategoryPage>),
    Tool(ViewState<ToolPage>),
    Search(ViewState<SearchPage>),
    Static(StaticPage),
    NotFound { path: String },
}

/// Result of a navigation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub route: Route,
    #[serde(flatten)]
    pub view: PageView,
}

/// Drives the data-backed views over a [`QueryService`].
///
/// Each view keeps its own slot, so a slow tool load never clobbers the
/// category view and a superseded load never clobbers a newer one.
pub struct Navigator {
    service: Arc<dyn QueryService>,
    location: Mutex<Route>,
    home: Mutex<ViewSlot<HomePage>>,
    category: Mutex<ViewSlot<CategoryPage>>,
    tool: Mutex<ViewSlot<ToolPage>>,
    search: Mutex<ViewSlot<SearchPage>>,
}

impl Navigator {
    pub fn new(service: Arc<dyn QueryService>) -> Self {
        Self {
            service,
            location: Mutex::new(Route::Home),
            home: Mutex::new(ViewSlot::new("home")),
            category: Mutex::new(ViewSlot::new("category")),
            tool: Mutex::new(ViewSlot::new("tool")),
            search: Mutex::new(ViewSlot::new("search")),
        }
    }

    /// Current location.
    pub async fn location(&self) -> Route {
        self.location.lock().await.clone()
    }

    /// Go to `path` and load its view. With no path, reload the current
    /// location; this is the retry action for a failed view.
    #[instrument(skip(self))]
    pub async fn navigate(&self, path: Option<&str>) -> Page {
        let route = match path {
            Some(path) => Route::parse(path),
            None => self.location().await,
        };
        *self.location.lock().await = route.clone();
        info!("Navigating to {}", route);

        let service = self.service.as_ref();
        let view = match &route {
            Route::Home => PageView::Home(load(&self.home, pages::load_home(service)).await),
            Route::Category(id) => PageView::Category(
                load(&self.category, pages::load_category(service, *id)).await,
            ),
            Route::Tool(id) => {
                PageView::Tool(load(&self.tool, pages::load_tool(service, *id)).await)
            }
            Route::Search { query } => {
                PageView::Search(load(&self.search, pages::load_search(service, query)).await)
            }
            Route::NotFound(path) => PageView::NotFound { path: path.clone() },
            other => PageView::Static(StaticPage {
                title: other.static_title().unwrap_or_default(),
                path: other.to_string(),
            }),
        };

        Page { route, view }
    }

    /// Up to five tools matching a partially typed query.
    #[instrument(skip(self))]
    pub async fn suggest(&self, query: &str) -> CatalogResult<Vec<Suggestion>> {
        let query = query.trim();
        if query.chars().count() < SUGGEST_MIN_CHARS {
            return Ok(Vec::new());
        }

        let tools = self.service.search_tools(query).await?;
        Ok(tools
            .into_iter()
            .take(SUGGEST_LIMIT)
            .map(|t| Suggestion {
                id: t.id,
                name: t.name,
                category_id: t.category_id,
            })
            .collect())
    }
}

/// Run one load through `slot`. The slot lock is released while the load is
/// in flight, and the returned state is whatever the slot holds afterwards.
async fn load<T, F>(slot: &Mutex<ViewSlot<T>>, fut: F) -> ViewState<T>
where
    T: ViewData + Clone,
    F: Future<Output = CatalogResult<T>>,
{
    let ticket = slot.lock().await.begin();
    let result = fut.await;

    let mut slot = slot.lock().await;
    slot.settle(ticket, result);
    slot.state().clone()
}
