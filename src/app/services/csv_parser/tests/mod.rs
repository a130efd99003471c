//! Test utilities shared across the CSV parser test modules

use crate::app::models::Row;


/// Collect a row's cell values for compact assertions
pub fn row_values(row: &Row) -> Vec<&str> {
    row.values().collect()
}

/// A small well-formed CSV fixture
pub fn simple_csv() -> &'static str {
    "Name,Age,City\nAlice,30,Paris\nBob,45,London"
}

/// Build a CSV with `rows` numbered data rows under a two-column header
pub fn numbered_csv(rows: usize) -> String {
    let mut text = String::from("id,label\n");
    for i in 0..rows {
        text.push_str(&format!("{},row {}\n", i, i));
    }
    text
}
