//! Preview window state and operations

use serde::{Deserialize, Serialize};

use crate::app::models::Row;

/// Relation between the visible window and the full row set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowState {
    /// Only a prefix of the rows is visible
    Preview,
    /// Every row is visible (includes the empty table)
    Full,
}

/// Owner of the full parsed row set and its visible prefix
///
/// The visible window is always a prefix of the full set, so it is exposed
/// as a borrowed slice rather than a copy. All operations are no-ops on an
/// empty table, and none of them re-parse: a fresh upload is the only way
/// to change the underlying rows.
#[derive(Debug, Clone, Default)]
pub struct PreviewWindow {
    all_rows: Vec<Row>,
    visible_len: usize,
}

impl PreviewWindow {
    /// Create an empty window
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the row set and apply the initial windowing policy
    pub fn initialize(&mut self, rows: Vec<Row>, preview_limit: usize) {
        self.visible_len = preview_limit.min(rows.len());
        self.all_rows = rows;
    }

    /// Widen the visible window by `increment` rows, bounded by the total
    pub fn load_next(&mut self, increment: usize) {
        self.visible_len = self
            .visible_len
            .saturating_add(increment)
            .min(self.all_rows.len());
    }

    /// Make every row visible
    pub fn load_all(&mut self) {
        self.visible_len = self.all_rows.len();
    }

    /// Re-apply the initial windowing policy to the current row set
    pub fn reset_view(&mut self, preview_limit: usize) {
        self.visible_len = preview_limit.min(self.all_rows.len());
    }

    /// Drop all rows and collapse the window
    pub fn clear(&mut self) {
        self.all_rows.clear();
        self.visible_len = 0;
    }

    /// The visible prefix of the row set
    pub fn visible_rows(&self) -> &[Row] {
        &self.all_rows[..self.visible_len]
    }

    /// The complete row set
    pub fn all_rows(&self) -> &[Row] {
        &self.all_rows
    }

    /// Total number of rows held
    pub fn total_rows(&self) -> usize {
        self.all_rows.len()
    }

    /// Number of rows currently visible
    pub fn visible_len(&self) -> usize {
        self.visible_len
    }

    /// Whether rows beyond the visible window remain hidden
    pub fn is_preview(&self) -> bool {
        self.visible_len < self.all_rows.len()
    }

    /// Current window state
    pub fn state(&self) -> WindowState {
        if self.is_preview() {
            WindowState::Preview
        } else {
            WindowState::Full
        }
    }
}
