//! Pure content normalization: drop the BOM, trim whitespace, end with one newline.

use super::constants::{BYTE_ORDER_MARK, TRIMMED_WHITESPACE};

/// Strip a leading BOM, trim surrounding whitespace, and append exactly one `\n`.
///
/// A BOM that only surfaces after trimming (e.g. a doubled BOM, or one behind
/// leading blank lines) is removed too, so normalizing the output again
/// returns it unchanged.
pub fn normalize_content(text: &str) -> String {
    let body = text
        .trim_start_matches(|c: char| c == BYTE_ORDER_MARK || TRIMMED_WHITESPACE.contains(&c))
        .trim_end_matches(TRIMMED_WHITESPACE);
    let mut s = String::with_capacity(body.len() + 1);
    s.push_str(body);
    s.push('\n');
    s
}

/// True if [`normalize_content`] would change the text.
pub fn needs_normalization(text: &str) -> bool {
    normalize_content(text) != text
}
