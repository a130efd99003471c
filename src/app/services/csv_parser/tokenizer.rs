//! Field tokenizer for CSV logical lines
//!
//! Scans one logical line (physical lines already joined where a quoted
//! field spans a line break) into raw field tokens. The same scanner is
//! applied to the header line and to every data line.

/// Split a logical line into raw field tokens
///
/// Scanning rules:
/// - `"` outside quotes opens a quoted region
/// - `""` inside quotes emits one literal `"` and stays quoted
/// - `"` inside quotes otherwise closes the quoted region
/// - `,` outside quotes ends the current field
/// - every other character, including embedded newlines, is kept verbatim
///
/// Always yields at least one token; an empty line yields one empty token.
/// An unterminated quote runs to end of input rather than failing.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    fields.push(current);
    fields
}

/// Count the `"` characters in a physical line
///
/// The parser buffers physical lines into one logical line while the
/// running quote count is odd, which is exactly the "a quoted field is
/// still open" condition.
pub fn quote_count(line: &str) -> usize {
    line.chars().filter(|&c| c == '"').count()
}
