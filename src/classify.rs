//! Character classes the scanner dispatches on.
//!
//! Plain predicates over single characters plus the grammar's fixed
//! keyword, operator, and punctuation tables. Bounds checking lives at
//! the caller: the scanner peeks an `Option<char>`, and a missing
//! character never satisfies a predicate.

/// Space, tab, newline, carriage return, or form feed.
pub const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C')
}

pub const fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Decimal digit or `A`-`F` in either case.
pub const fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

pub const fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub const fn is_identifier_continue(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}

/// Printable ASCII that may stand unescaped inside a character or
/// string literal: `0x20..=0x7E` minus the quote and backslash
/// characters, which must be escaped.
pub const fn is_literal_safe(c: char) -> bool {
    matches!(c, ' '..='~') && !matches!(c, '"' | '\'' | '\\')
}

/// Valid immediately after a backslash inside a literal.
pub const fn is_escapable(c: char) -> bool {
    matches!(c, '"' | '\'' | '\\' | 't' | 'n')
}

pub const fn is_one_char_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '%' | '<' | '>' | '!' | '=')
}

/// The grammar's complete two-character operator set. `&` and `|` have
/// no one-character form, so a lone one falls through to the
/// unrecognized-character report.
pub const fn is_two_char_operator(first: char, second: char) -> bool {
    matches!(
        (first, second),
        ('=', '=')
            | ('!', '=')
            | ('<', '=')
            | ('>', '=')
            | ('&', '&')
            | ('|', '|')
            | ('+', '=')
            | ('-', '=')
    )
}

pub const fn is_punctuation(c: char) -> bool {
    matches!(c, '(' | ')' | '{' | '}' | '[' | ']' | ',' | ';')
}

/// Reserved words. `true` and `false` are boolean literals, not
/// keywords.
pub const KEYWORDS: [&str; 11] = [
    "boolean", "break", "callout", "class", "continue", "else", "for", "if", "int", "return",
    "void",
];

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

pub fn is_boolean_literal(word: &str) -> bool {
    word == "true" || word == "false"
}
