//! Committed/lookahead position tracking for one scan.

/// Position state for one pass: a committed cursor marking the start of
/// the lexeme under construction, a lookahead cursor that runs ahead of
/// it during matching, and the 1-based line/column of the committed
/// position.
///
/// One explicit value rather than loose scanner fields, so the tracking
/// rules can be exercised on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    committed: usize,
    lookahead: usize,
    line: usize,
    column: usize,
}

impl Cursor {
    pub const fn new() -> Self {
        Self {
            committed: 0,
            lookahead: 0,
            line: 1,
            column: 1,
        }
    }

    /// Start of the lexeme under construction.
    pub const fn committed(&self) -> usize {
        self.committed
    }

    /// Current scan position.
    pub const fn lookahead(&self) -> usize {
        self.lookahead
    }

    /// 1-based line of the committed position.
    pub const fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the committed position, counted from the most
    /// recent newline.
    pub const fn column(&self) -> usize {
        self.column
    }

    /// True when the lookahead cursor has run ahead of the committed
    /// cursor.
    pub const fn has_pending(&self) -> bool {
        self.committed < self.lookahead
    }

    /// Move the lookahead cursor forward, clamped to `end`. Never moves
    /// backwards.
    pub fn advance(&mut self, count: usize, end: usize) {
        self.lookahead = usize::min(self.lookahead + count, end);
    }

    /// Advance the committed cursor to the lookahead cursor, folding the
    /// crossed span into the line/column counters: each newline starts a
    /// new line at column 1, every other character is one column.
    pub fn commit(&mut self, chars: &[char]) {
        for &c in &chars[self.committed..self.lookahead] {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.committed = self.lookahead;
    }
}
