//! Configuration for the intake pipeline.
//!
//! Provides the windowing parameters the orchestrator applies when a file
//! is loaded. Values are supplied at construction so test suites can
//! exercise boundary values deterministically; nothing here is a runtime
//! flag or module global.

use crate::constants::{DEFAULT_LOAD_INCREMENT, DEFAULT_PREVIEW_LIMIT};
use serde::{Deserialize, Serialize};

/// Windowing configuration for the upload orchestrator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Upper bound on the rows materialized into the initial preview window
    pub preview_limit: usize,

    /// Rows added to the visible window per "load next" request
    pub load_increment: usize,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            load_increment: DEFAULT_LOAD_INCREMENT,
        }
    }
}

impl IntakeConfig {
    /// Create configuration with a custom preview limit
    pub fn with_preview_limit(mut self, preview_limit: usize) -> Self {
        self.preview_limit = preview_limit;
        self
    }

    /// Create configuration with a custom load increment
    pub fn with_load_increment(mut self, load_increment: usize) -> Self {
        self.load_increment = load_increment;
        self
    }
}
