//! Parsing statistics and result structures
//!
//! Every parse is paired with counters describing how much fallback
//! handling the input needed, so callers can report data quality without
//! re-scanning the text.

use serde::{Deserialize, Serialize};

use crate::app::models::ParsedTable;

/// Parsing result: the table plus statistics about its extraction
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseResult {
    /// The parsed header and data rows
    pub table: ParsedTable,

    /// Counters collected during parsing
    pub stats: ParseStats,
}

/// Counters describing one parse
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParseStats {
    /// Physical lines after line-ending normalization
    pub physical_lines: usize,

    /// Data rows produced
    pub rows_parsed: usize,

    /// Rows with fewer fields than columns, padded with empty cells
    pub padded_rows: usize,

    /// Rows with more fields than columns, extra fields dropped
    pub truncated_rows: usize,

    /// Empty logical lines between rows that produced no row
    pub blank_lines_skipped: usize,

    /// Header tokens rewritten to make the column list unique and non-empty
    pub renamed_headers: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the input needed any fallback handling at all
    pub fn has_irregularities(&self) -> bool {
        self.padded_rows > 0
            || self.truncated_rows > 0
            || self.blank_lines_skipped > 0
            || self.renamed_headers > 0
    }
}
