//! Widget input errors.

use thiserror::Error;

/// Result type for widget computations.
pub type WidgetResult<T> = Result<T, ValidationError>;

/// A user input problem reported inline by a widget.
///
/// These never fail a view; the widget shows the message next to its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
