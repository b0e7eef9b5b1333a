//! Per-view load state.
//!
//! Every data-backed view owns a [`ViewSlot`]. A load takes a [`LoadTicket`]
//! when it starts and hands it back with its result; only the ticket of the
//! most recent load may settle the slot.

use serde::Serialize;
use tracing::debug;

use crate::domains::catalog::CatalogResult;

/// Data that can legitimately come back with nothing to show.
pub trait ViewData {
    fn is_empty(&self) -> bool;
}

/// Lifecycle of one view.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum ViewState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    /// Loaded successfully, but there is nothing to list.
    Empty(T),
    /// Load failed; carries the error message.
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Proof that a load was started; redeemed by [`ViewSlot::settle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct LoadTicket(u64);

/// Holder of a view's state and its load generation.
#[derive(Debug)]
pub struct ViewSlot<T> {
    name: &'static str,
    generation: u64,
    state: ViewState<T>,
}

impl<T: ViewData> ViewSlot<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            generation: 0,
            state: ViewState::Idle,
        }
    }

    /// Start a new load, superseding any load still in flight.
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state = ViewState::Loading;
        LoadTicket(self.generation)
    }

    /// Apply a load result. Returns false when the ticket is stale and the
    /// result was dropped.
    pub fn settle(&mut self, ticket: LoadTicket, result: CatalogResult<T>) -> bool {
        if ticket.0 != self.generation {
            debug!(
                "Discarding stale {} load (generation {}, current {})",
                self.name, ticket.0, self.generation
            );
            return false;
        }

        self.state = match result {
            Ok(data) if data.is_empty() => ViewState::Empty(data),
            Ok(data) => ViewState::Ready(data),
            Err(e) => ViewState::Failed(e.to_string()),
        };
        true
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::{CatalogError, ToolId};

    impl ViewData for Vec<u32> {
        fn is_empty(&self) -> bool {
            <[u32]>::is_empty(self)
        }
    }

    #[test]
    fn test_lifecycle() {
        let mut slot: ViewSlot<Vec<u32>> = ViewSlot::new("test");
        assert_eq!(slot.state(), &ViewState::Idle);

        let ticket = slot.begin();
        assert!(slot.state().is_loading());

        assert!(slot.settle(ticket, Ok(vec![1, 2])));
        assert_eq!(slot.state(), &ViewState::Ready(vec![1, 2]));
    }

    #[test]
    fn test_empty_is_not_an_error() {
        let mut slot: ViewSlot<Vec<u32>> = ViewSlot::new("test");
        let ticket = slot.begin();
        slot.settle(ticket, Ok(vec![]));
        assert_eq!(slot.state(), &ViewState::Empty(vec![]));
    }

    #[test]
    fn test_failure_carries_message() {
        let mut slot: ViewSlot<Vec<u32>> = ViewSlot::new("test");
        let ticket = slot.begin();
        slot.settle(ticket, Err(CatalogError::ToolNotFound(ToolId(99))));
        assert_eq!(
            slot.state(),
            &ViewState::Failed("Tool not found".to_string())
        );
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut slot: ViewSlot<Vec<u32>> = ViewSlot::new("test");
        let first = slot.begin();
        let second = slot.begin();

        assert!(slot.settle(second, Ok(vec![2])));
        assert!(!slot.settle(first, Ok(vec![1])));
        assert_eq!(slot.state(), &ViewState::Ready(vec![2]));
    }

    #[test]
    fn test_stale_result_does_not_end_newer_loading() {
        let mut slot: ViewSlot<Vec<u32>> = ViewSlot::new("test");
        let first = slot.begin();
        let _second = slot.begin();

        assert!(!slot.settle(first, Err(CatalogError::invalid_dataset("boom"))));
        assert!(slot.state().is_loading());
    }

    #[test]
    fn test_state_serialization() {
        let ready: ViewState<Vec<u32>> = ViewState::Ready(vec![1]);
        assert_eq!(
            serde_json::to_value(&ready).unwrap(),
            serde_json::json!({"status": "ready", "data": [1]})
        );
        let loading: ViewState<Vec<u32>> = ViewState::Loading;
        assert_eq!(
            serde_json::to_value(&loading).unwrap(),
            serde_json::json!({"status": "loading"})
        );
    }
}
