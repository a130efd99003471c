//! Data models for the CSV intake pipeline
//!
//! This module contains the core data structures for representing a parsed
//! CSV table and the metadata of an accepted upload. Rows and cells are
//! immutable value records: once a table is produced by the parser it is
//! never mutated, only replaced by the next upload.

use serde::{Deserialize, Serialize};

use crate::constants::cell_key;

// =============================================================================
// Parsed Table Structures
// =============================================================================

/// A fully parsed CSV table: ordered header names plus ordered data rows
///
/// Column names are unique and non-empty (duplicates and empty tokens are
/// renamed deterministically at parse time) and preserve the left-to-right
/// order of the source. Rows preserve source order after the header line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedTable {
    /// Ordered, de-duplicated header names
    pub columns: Vec<String>,

    /// Ordered data rows, positionally aligned with `columns`
    pub rows: Vec<Row>,
}

impl ParsedTable {
    /// Check whether the table holds no columns and no rows
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }
}

/// One parsed data row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Zero-based position among parsed data rows, assigned at parse time
    pub index: usize,

    /// One cell per column, in column order
    pub cells: Vec<Cell>,
}

impl Row {
    /// Look up a cell value by column name
    pub fn value(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|cell| cell.column == column)
            .map(|cell| cell.value.as_str())
    }

    /// Cell values in column order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|cell| cell.value.as_str())
    }
}

/// One cell of a parsed row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Synthesized addressing key, `<column>_<row index>`
    pub key: String,

    /// Name of the column this cell belongs to
    pub column: String,

    /// Trimmed field value; empty when the source row was short
    pub value: String,
}

impl Cell {
    /// Create a cell with its synthesized key
    pub fn new(column: impl Into<String>, row_index: usize, value: impl Into<String>) -> Self {
        let column = column.into();
        Self {
            key: cell_key(&column, row_index),
            column,
            value: value.into(),
        }
    }
}

// =============================================================================
// Upload Metadata
// =============================================================================

/// Metadata captured verbatim from the selected file at upload time
///
/// Captured before the asynchronous read starts, so it is present even when
/// the read or the decode later fails.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileMeta {
    /// File name as reported by the upload source
    pub file_name: String,

    /// File size in bytes as reported by the upload source
    pub file_size_bytes: u64,
}

impl FileMeta {
    /// Create metadata for an accepted upload
    pub fn new(file_name: impl Into<String>, file_size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            file_size_bytes,
        }
    }
}
