//! Parsing orchestration
//!
//! Turns raw CSV text into a [`ParsedTable`]: normalizes line endings,
//! joins physical lines into logical lines wherever a quoted field spans a
//! line break, tokenizes the header and every data line, and zips row
//! tokens positionally with the normalized column list.
//!
//! The parser is pure and infallible for string input. Structural
//! irregularities degrade gracefully: short rows are padded with empty
//! cells, long rows are truncated, and an unterminated quote at end of
//! input is flushed as a final best-effort row.

use tracing::debug;

use super::header::{NormalizedHeader, normalize_headers};
use super::stats::{ParseResult, ParseStats};
use super::tokenizer::{quote_count, tokenize};
use crate::app::models::{Cell, ParsedTable, Row};

/// Parse raw CSV text into a table with statistics
///
/// The first logical line is the header; every following logical line is a
/// data row. Empty input (or a single blank line) produces an empty table,
/// not an error.
pub fn parse(text: &str) -> ParseResult {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines: Vec<&str> = normalized.split('\n').collect();

    // A trailing newline yields one empty artifact segment, not a data line.
    if lines.len() > 1 && lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let mut stats = ParseStats::new();
    stats.physical_lines = lines.len();

    if lines.is_empty() || (lines.len() == 1 && lines[0].trim().is_empty()) {
        debug!("Blank upload text, producing empty table");
        return ParseResult {
            table: ParsedTable::default(),
            stats,
        };
    }

    // The header itself may span physical lines when a quoted name contains
    // a line break.
    let (header_line, mut cursor) = buffer_logical_line(&lines, 0);
    let raw_header = tokenize(&header_line);
    let NormalizedHeader { columns, renamed } = normalize_headers(&raw_header);
    stats.renamed_headers = renamed;

    let mut rows = Vec::new();
    while cursor < lines.len() {
        let (logical_line, next) = buffer_logical_line(&lines, cursor);
        cursor = next;

        if logical_line.is_empty() {
            stats.blank_lines_skipped += 1;
            continue;
        }

        let tokens = tokenize(&logical_line);
        let index = rows.len();
        let cells = columns
            .iter()
            .enumerate()
            .map(|(position, column)| {
                let value = tokens.get(position).map(|t| t.trim()).unwrap_or("");
                Cell::new(column.clone(), index, value)
            })
            .collect();

        if tokens.len() < columns.len() {
            stats.padded_rows += 1;
        } else if tokens.len() > columns.len() {
            stats.truncated_rows += 1;
        }

        rows.push(Row { index, cells });
    }
    stats.rows_parsed = rows.len();

    debug!(
        "Parsed {} columns and {} rows from {} physical lines",
        columns.len(),
        rows.len(),
        stats.physical_lines
    );

    ParseResult {
        table: ParsedTable { columns, rows },
        stats,
    }
}

/// Join physical lines into one logical line
///
/// Lines are accumulated (joined with `\n`) while the running quote count
/// is odd, meaning a quoted field is still open. Returns the joined line
/// and the index of the first unconsumed physical line. A buffer left open
/// at end of input is returned as-is.
fn buffer_logical_line(lines: &[&str], start: usize) -> (String, usize) {
    let mut buffer = String::from(lines[start]);
    let mut open_quote = quote_count(lines[start]) % 2 == 1;
    let mut next = start + 1;

    while open_quote && next < lines.len() {
        buffer.push('\n');
        buffer.push_str(lines[next]);
        if quote_count(lines[next]) % 2 == 1 {
            open_quote = false;
        }
        next += 1;
    }

    (buffer, next)
}
