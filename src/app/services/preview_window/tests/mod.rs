//! Test utilities for the preview window

use crate::app::models::{Cell, Row};


/// Build `count` single-cell rows for windowing tests
pub fn make_rows(count: usize) -> Vec<Row> {
    (0..count)
        .map(|index| Row {
            index,
            cells: vec![Cell::new("id", index, index.to_string())],
        })
        .collect()
}
