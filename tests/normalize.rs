//! Property tests for normalize_content.

use proptest::prelude::*;
use repo_clean::cleaner::constants::BYTE_ORDER_MARK;
use repo_clean::cleaner::normalize::{needs_normalization, normalize_content};

fn text_with_noise() -> impl Strategy<Value = String> {
    (
        prop::bool::ANY,
        "[ \t\r\n\x0b\x0c]{0,4}",
        "\\PC{0,40}",
        "[ \t\r\n\x0b\x0c]{0,6}",
    )
        .prop_map(|(bom, lead, body, tail)| {
            let mut s = String::new();
            if bom {
                s.push('\u{feff}');
            }
            s.push_str(&lead);
            s.push_str(&body);
            s.push_str(&tail);
            s
        })
}

proptest! {
    /// Normalizing twice is the same as normalizing once.
    #[test]
    fn normalize_is_idempotent(text in any::<String>()) {
        let once = normalize_content(&text);
        prop_assert_eq!(normalize_content(&once), once.clone());
        prop_assert!(!needs_normalization(&once), "normalized output still needs normalization");
    }

    /// Output never starts with a BOM.
    #[test]
    fn normalize_strips_bom(text in text_with_noise()) {
        let out = normalize_content(&text);
        prop_assert!(!out.starts_with(BYTE_ORDER_MARK), "output starts with a BOM");
    }

    /// Output ends with exactly one newline and no other whitespace before it.
    #[test]
    fn normalize_single_trailing_newline(text in text_with_noise()) {
        let out = normalize_content(&text);
        prop_assert!(out.ends_with('\n'));
        let body = &out[..out.len() - 1];
        prop_assert!(
            !body.ends_with([' ', '\t', '\n', '\r', '\x0b', '\x0c']),
            "whitespace before the final newline"
        );
    }
}

#[test]
fn normalize_scenarios() {
    assert_eq!(normalize_content("\u{feff}hello world"), "hello world\n");
    assert_eq!(normalize_content("line1\nline2\n\n\n   "), "line1\nline2\n");
    assert_eq!(normalize_content(""), "\n");
    assert_eq!(normalize_content("clean\n"), "clean\n");
}
