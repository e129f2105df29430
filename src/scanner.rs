//! The scanning pass: source text in, ordered tokens and diagnostics out.

use crate::classify;
use crate::cursor::Cursor;
use crate::token::{ErrorToken, Token, TokenKind, TokenOrError};

/// Scan a source file into its full token sequence.
///
/// Never fails: a malformed lexeme becomes an [`ErrorToken`] in place and
/// the pass resumes immediately after the offending character, so one
/// call reports every lexical defect in the file. `filename` is used
/// only to prefix diagnostics.
///
/// ```
/// use decaf_lex::scan;
///
/// let tokens = scan("int x = 0x2A;", "demo.dcf");
/// assert_eq!(tokens.len(), 5);
/// assert!(tokens.iter().all(|t| !t.is_error()));
/// ```
#[must_use]
pub fn scan(source: &str, filename: &str) -> Vec<TokenOrError> {
    Scanner::new(source, filename).run()
}

struct Scanner<'a> {
    chars: Vec<char>,
    filename: &'a str,
    cursor: Cursor,
    output: Vec<TokenOrError>,
}

impl<'a> Scanner<'a> {
    fn new(source: &str, filename: &'a str) -> Self {
        Self {
            chars: source.chars().collect(),
            filename,
            cursor: Cursor::new(),
            output: Vec::new(),
        }
    }

    /// One left-to-right pass. The character at the lookahead cursor
    /// picks a sub-automaton, tried in fixed precedence order; the
    /// two-character operator case runs before the one-character case so
    /// `==` can never split into two `=` tokens.
    fn run(mut self) -> Vec<TokenOrError> {
        while let Some(first) = self.peek() {
            match first {
                c if classify::is_whitespace(c) => {
                    self.advance(1);
                    self.discard();
                }
                '/' if self.peek_at(1) == Some('/') => self.read_comment(),
                c if classify::is_identifier_start(c) => self.read_word(),
                c if classify::is_decimal_digit(c) => self.read_number(),
                '\'' => self.read_char_literal(),
                '"' => self.read_string_literal(),
                c if self.peek_at(1).is_some_and(|n| classify::is_two_char_operator(c, n)) => {
                    self.advance(2);
                    self.emit_token(None);
                }
                c if classify::is_one_char_operator(c) || classify::is_punctuation(c) => {
                    self.advance(1);
                    self.emit_token(None);
                }
                _ => self.emit_error(None),
            }
        }

        self.output
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.cursor.lookahead()).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.cursor.lookahead() + offset).copied()
    }

    fn advance(&mut self, count: usize) {
        self.cursor.advance(count, self.chars.len());
    }

    /// The span between the committed and lookahead cursors.
    fn lexeme(&self) -> String {
        self.chars[self.cursor.committed()..self.cursor.lookahead()]
            .iter()
            .collect()
    }

    /// Commit the current span without emitting (whitespace, comments).
    fn discard(&mut self) {
        self.cursor.commit(&self.chars);
    }

    fn emit_token(&mut self, kind: Option<TokenKind>) {
        let token = Token {
            text: self.lexeme(),
            kind,
            line: self.cursor.line(),
        };
        self.output.push(token.into());
        self.cursor.commit(&self.chars);
    }

    /// Report a defect at the lookahead character and resume after it.
    ///
    /// Any pending prefix (the `0x` of a bad hex literal, the opening
    /// quote of a bad char literal) is committed first so line and
    /// column name the offending character itself; that character is
    /// then consumed as the error's own span. At end of input there is
    /// nothing left to consume and `actual` is `None`.
    fn emit_error(&mut self, expectation: Option<char>) {
        if self.cursor.has_pending() {
            self.cursor.commit(&self.chars);
        }
        let actual = self.peek();
        self.advance(1);
        let error = ErrorToken {
            filename: self.filename.to_string(),
            line: self.cursor.line(),
            column: self.cursor.column(),
            expectation,
            actual,
        };
        self.output.push(error.into());
        self.cursor.commit(&self.chars);
    }

    /// `//` through and including the next newline, or to end of input.
    fn read_comment(&mut self) {
        self.advance(2);
        while let Some(c) = self.peek() {
            self.advance(1);
            if c == '\n' {
                break;
            }
        }
        self.discard();
    }

    /// Maximal run of identifier characters, classified afterwards.
    fn read_word(&mut self) {
        self.advance(1);
        while self.peek().is_some_and(classify::is_identifier_continue) {
            self.advance(1);
        }

        let word = self.lexeme();
        let kind = if classify::is_boolean_literal(&word) {
            Some(TokenKind::BooleanLiteral)
        } else if classify::is_keyword(&word) {
            None
        } else {
            Some(TokenKind::Identifier)
        };
        self.emit_token(kind);
    }

    /// Decimal digit run, or `0x` followed by a required hex digit run.
    fn read_number(&mut self) {
        if self.peek() == Some('0') && self.peek_at(1) == Some('x') {
            self.advance(2);
            if !self.peek().is_some_and(classify::is_hex_digit) {
                self.emit_error(None);
                return;
            }
            while self.peek().is_some_and(classify::is_hex_digit) {
                self.advance(1);
            }
        } else {
            while self.peek().is_some_and(classify::is_decimal_digit) {
                self.advance(1);
            }
        }
        self.emit_token(Some(TokenKind::IntLiteral));
    }

    /// `'a'` or `'\n'`: exactly one interior character, then the closing
    /// quote.
    fn read_char_literal(&mut self) {
        self.advance(1);
        match self.peek() {
            Some(c) if classify::is_literal_safe(c) => {
                self.advance(1);
                self.close_char_literal();
            }
            Some('\\') => {
                self.advance(1);
                if self.peek().is_some_and(classify::is_escapable) {
                    self.advance(1);
                    self.close_char_literal();
                } else {
                    self.emit_error(None);
                }
            }
            _ => self.emit_error(None),
        }
    }

    /// Interior accepted; the next character must be the closing quote.
    fn close_char_literal(&mut self) {
        if self.peek() == Some('\'') {
            self.advance(1);
            self.emit_token(Some(TokenKind::CharLiteral));
        } else {
            self.emit_error(Some('\''));
        }
    }

    /// `"…"`: a run of literal-safe or escaped characters up to the
    /// closing quote. The first interior defect ends the string; the
    /// remainder is rescanned as ordinary input rather than retried as
    /// a string.
    fn read_string_literal(&mut self) {
        self.advance(1);
        loop {
            match self.peek() {
                Some('"') => {
                    self.advance(1);
                    self.emit_token(Some(TokenKind::StringLiteral));
                    return;
                }
                Some(c) if classify::is_literal_safe(c) => self.advance(1),
                Some('\\') => {
                    self.advance(1);
                    match self.peek() {
                        Some(c) if classify::is_escapable(c) => self.advance(1),
                        Some(_) => {
                            self.emit_error(None);
                            return;
                        }
                        None => {
                            self.emit_error(Some('"'));
                            return;
                        }
                    }
                }
                Some(_) => {
                    self.emit_error(None);
                    return;
                }
                None => {
                    self.emit_error(Some('"'));
                    return;
                }
            }
        }
    }
}
