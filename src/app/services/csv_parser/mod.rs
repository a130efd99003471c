//! CSV parser for uploaded import files
//!
//! This module provides a deterministic, pure parser from raw CSV text to a
//! [`ParsedTable`](crate::app::models::ParsedTable). It tolerates the
//! irregularities real upload files carry (ragged rows, unmatched quotes,
//! duplicate or empty header names, fields spanning line breaks) by applying
//! fixed fallback rules instead of failing.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Parsing orchestration: line normalization, logical-line
//!   buffering, row assembly
//! - [`tokenizer`] - Field scanner handling quoting and escaped quotes
//! - [`header`] - Header name trimming, back-filling, and de-duplication
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use csv_intake::app::services::csv_parser;
//!
//! let result = csv_parser::parse("Name,Age\nAlice,30\nBob,45");
//! assert_eq!(result.table.columns, vec!["Name", "Age"]);
//! assert_eq!(result.table.rows.len(), 2);
//! ```

pub mod header;
pub mod parser;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use parser::parse;
pub use stats::{ParseResult, ParseStats};
