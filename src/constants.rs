//! Application constants for the CSV intake engine
//!
//! This module contains the default windowing values, header fallback
//! naming rules, and helper functions used throughout the intake pipeline.

// =============================================================================
// Preview Windowing Defaults
// =============================================================================

/// Default number of rows materialized into the visible preview window
pub const DEFAULT_PREVIEW_LIMIT: usize = 100;

/// Default number of rows added to the visible window per "load next" call
pub const DEFAULT_LOAD_INCREMENT: usize = 100;

// =============================================================================
// Header Naming Rules
// =============================================================================

/// Prefix used when an empty header token is replaced by its column position
pub const PLACEHOLDER_COLUMN_PREFIX: &str = "Column_";

/// First numeric suffix tried when de-duplicating a repeated header name
pub const DUPLICATE_SUFFIX_START: usize = 2;

// =============================================================================
// Helper Functions
// =============================================================================

/// Build the placeholder name for an empty header token at a 1-based position
pub fn placeholder_column_name(position: usize) -> String {
    format!("{}{}", PLACEHOLDER_COLUMN_PREFIX, position)
}

/// Build the synthesized addressing key for a cell
///
/// Keys are unique within a parsed table because column names are unique
/// and row indices are sequential; they carry no other meaning.
pub fn cell_key(column: &str, row_index: usize) -> String {
    format!("{}_{}", column, row_index)
}
