use std::fmt;

/// Classification for tokens whose lexeme alone is ambiguous.
///
/// Keywords, operators, and punctuation are self-describing and carry no
/// kind; see [`Token::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Name that is not a keyword or boolean literal.
    Identifier,
    /// Decimal (`42`) or hexadecimal (`0x2A`) integer literal.
    IntLiteral,
    /// Character literal, quotes included (`'a'`, `'\n'`).
    CharLiteral,
    /// String literal, quotes included (`"hi"`).
    StringLiteral,
    /// `true` or `false`.
    BooleanLiteral,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Identifier => "IDENTIFIER",
            Self::IntLiteral => "INTLITERAL",
            Self::CharLiteral => "CHARLITERAL",
            Self::StringLiteral => "STRINGLITERAL",
            Self::BooleanLiteral => "BOOLEANLITERAL",
        })
    }
}

/// A single well-formed token.
///
/// Renders as `<line> <KIND> <lexeme>`, or `<line> <lexeme>` when the
/// lexeme is a grammar terminal (keyword, operator, punctuation) and
/// `kind` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The raw lexeme, exactly as it appears in the source.
    pub text: String,
    /// Classification, absent for self-describing lexemes.
    pub kind: Option<TokenKind>,
    /// 1-based line of the lexeme's first character.
    pub line: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.line)?;
        if let Some(kind) = self.kind {
            write!(f, "{kind} ")?;
        }
        f.write_str(&self.text)
    }
}

/// Diagnostic emitted in place of a token when a lexeme is malformed.
///
/// The scanner consumes the offending character and keeps going, so one
/// pass reports every lexical defect in a file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{filename} line {line}:{column}: {}", self.message())]
pub struct ErrorToken {
    /// Source file name, used only to prefix the diagnostic.
    pub filename: String,
    /// 1-based line of the failure point.
    pub line: usize,
    /// 1-based column of the failure point, counted from the most
    /// recent newline.
    pub column: usize,
    /// Closing delimiter that was required but not found, when the
    /// failure is a missing `'` or `"`; `None` for a character that is
    /// simply unscannable where it stands.
    pub expectation: Option<char>,
    /// The character at the failure point, or `None` at end of input.
    pub actual: Option<char>,
}

impl ErrorToken {
    /// Diagnostic text after the `<filename> line <line>:<column>: ` prefix.
    fn message(&self) -> String {
        self.expectation.map_or_else(
            || format!("unexpected char: {}", render_unexpected(self.actual)),
            |expected| format!("expecting '{expected}', found {}", render_expected(self.actual)),
        )
    }
}

/// Render the found character for the `unexpected char:` form.
///
/// Control characters the scanner can trip over appear as hexadecimal
/// escapes; anything else is quoted verbatim.
fn render_unexpected(actual: Option<char>) -> String {
    match actual {
        None => "end of input".to_string(),
        Some('\x0C') => "0xC".to_string(),
        Some('\n') => "0xA".to_string(),
        Some('\t') => "0x9".to_string(),
        Some(c) => format!("'{c}'"),
    }
}

/// Render the found character for the `expecting '<d>', found` form,
/// where the same control characters use backslash escapes instead.
fn render_expected(actual: Option<char>) -> String {
    match actual {
        None => "end of input".to_string(),
        Some('\x0C') => "'\\f'".to_string(),
        Some('\n') => "'\\n'".to_string(),
        Some('\t') => "'\\t'".to_string(),
        Some(c) => format!("'{c}'"),
    }
}

/// One element of the scanner's output: exactly one of a token or an
/// error token, matched exhaustively by consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenOrError {
    /// A well-formed token.
    Token(Token),
    /// A lexical defect, reported in place.
    Error(ErrorToken),
}

impl TokenOrError {
    /// True for the error variant.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The token, if this element is one.
    #[must_use]
    pub const fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Token(token) => Some(token),
            Self::Error(_) => None,
        }
    }

    /// The error token, if this element is one.
    #[must_use]
    pub const fn as_error(&self) -> Option<&ErrorToken> {
        match self {
            Self::Token(_) => None,
            Self::Error(error) => Some(error),
        }
    }
}

impl From<Token> for TokenOrError {
    fn from(token: Token) -> Self {
        Self::Token(token)
    }
}

impl From<ErrorToken> for TokenOrError {
    fn from(error: ErrorToken) -> Self {
        Self::Error(error)
    }
}

impl fmt::Display for TokenOrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(token) => token.fmt(f),
            Self::Error(error) => error.fmt(f),
        }
    }
}
