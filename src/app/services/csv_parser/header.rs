//! Header name normalization
//!
//! Raw header tokens from an upload are frequently unusable as-is: exports
//! produce trailing separators (empty tokens) and repeated names. This
//! module rewrites them into a unique, non-empty column list while
//! preserving source order.

use std::collections::HashSet;

use crate::constants::{DUPLICATE_SUFFIX_START, placeholder_column_name};

/// Normalized header names plus how many raw tokens had to be rewritten
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedHeader {
    /// Unique, non-empty column names in source order
    pub columns: Vec<String>,

    /// Raw tokens whose final name differs from their trimmed input
    pub renamed: usize,
}

/// Normalize raw header tokens into unique column names
///
/// Each token is trimmed. An empty token becomes `Column_<1-based position>`.
/// A token that collides with an earlier column (including earlier generated
/// names) gets a `_<n>` suffix, with `n` counted up from 2 until unique.
///
/// Example: `["", "Name", "Name", ""]` becomes
/// `["Column_1", "Name", "Name_2", "Column_4"]`.
pub fn normalize_headers(raw_tokens: &[String]) -> NormalizedHeader {
    let mut columns = Vec::with_capacity(raw_tokens.len());
    let mut seen: HashSet<String> = HashSet::with_capacity(raw_tokens.len());
    let mut renamed = 0;

    for (position, raw) in raw_tokens.iter().enumerate() {
        let trimmed = raw.trim();
        let base = if trimmed.is_empty() {
            placeholder_column_name(position + 1)
        } else {
            trimmed.to_string()
        };

        let mut name = base.clone();
        let mut suffix = DUPLICATE_SUFFIX_START;
        while seen.contains(&name) {
            name = format!("{}_{}", base, suffix);
            suffix += 1;
        }

        if name != trimmed {
            renamed += 1;
        }
        seen.insert(name.clone());
        columns.push(name);
    }

    NormalizedHeader { columns, renamed }
}
