#![allow(dead_code)]

use decaf_lex::{TokenOrError, scan};

/// Scan under the fixed diagnostic filename the suite uses everywhere.
pub fn scan_source(source: &str) -> Vec<TokenOrError> {
    scan(source, "test.dcf")
}

/// Render each element the way `decafc -target scan` prints it.
pub fn rendered(source: &str) -> Vec<String> {
    scan_source(source)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Every token lexeme, concatenated in order of appearance.
pub fn joined_lexemes(source: &str) -> String {
    scan_source(source)
        .iter()
        .filter_map(|element| element.as_token().map(|token| token.text.as_str()))
        .collect()
}

pub fn error_count(source: &str) -> usize {
    scan_source(source)
        .iter()
        .filter(|element| element.is_error())
        .count()
}

/// Assert that `source` scans into exactly the given lexemes, with no
/// error tokens mixed in.
pub fn assert_lexemes(source: &str, expected: &[&str]) {
    let output = scan_source(source);
    let texts: Vec<&str> = output
        .iter()
        .map(|element| {
            element
                .as_token()
                .unwrap_or_else(|| panic!("unexpected error in {source:?}: {element}"))
                .text
                .as_str()
        })
        .collect();
    assert_eq!(texts, expected, "lexeme mismatch for {source:?}");
}
