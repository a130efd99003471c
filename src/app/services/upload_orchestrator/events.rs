//! Outbound intake events and the listener interface
//!
//! Events are fire-and-forget: the orchestrator delivers each event to
//! every registered listener in registration order and ignores whatever
//! the listeners do with it. Listeners must not call back into the
//! orchestrator during delivery.

use serde::Serialize;

use crate::app::models::Row;

/// Events published by the upload orchestrator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum IntakeEvent {
    /// A file was parsed successfully; carries the full table
    CsvLoaded {
        columns: Vec<String>,
        rows: Vec<Row>,
        file_name: String,
        file_size: u64,
    },

    /// Column names are available for downstream configuration
    HeadersReady { columns: Vec<String> },

    /// The user advanced to the mapping stage; rows are intentionally
    /// omitted because mapping only needs column names
    GoToMapping {
        columns: Vec<String>,
        file_name: String,
        file_size: u64,
    },
}

impl IntakeEvent {
    /// Wire name of the event as consumed by the mapping stage
    pub fn name(&self) -> &'static str {
        match self {
            Self::CsvLoaded { .. } => "csvloaded",
            Self::HeadersReady { .. } => "headersready",
            Self::GoToMapping { .. } => "gotomapping",
        }
    }
}

/// Receiver of intake events
pub trait IntakeListener: Send + Sync {
    /// Called once per emitted event, in emission order
    fn on_event(&self, event: &IntakeEvent);
}

impl<F> IntakeListener for F
where
    F: Fn(&IntakeEvent) + Send + Sync,
{
    fn on_event(&self, event: &IntakeEvent) {
        self(event)
    }
}
