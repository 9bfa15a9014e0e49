//! Position and token model.
//!
//! Canonical representation of a source token: kind, lexeme, and a 1-based
//! (line, column) position. Columns count characters, not bytes. Tokens are
//! produced by a token producer (see `lexer`) and are never mutated by the
//! engine.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A 1-based source position. Ordering is lexicographic on (line, column).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Pos {
    pub line: u32,
    pub col: u32,
}

impl Pos {
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.line, self.col)
    }
}

/// The kind tag of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    Identifier,
    Keyword,
    Number,
    Str,
    CharLit,
    Operator,
    Punct,
    LineComment,
    BlockComment,
}

impl TokenKind {
    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }
}

/// An immutable source token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub pos: Pos,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, pos: Pos) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            pos,
        }
    }

    /// The last column this token occupies on its starting line (inclusive).
    pub fn end_col(&self) -> u32 {
        let first_line_width = self
            .lexeme
            .split('\n')
            .next()
            .map(|l| l.chars().count() as u32)
            .unwrap_or(0);
        self.pos.col + first_line_width.saturating_sub(1)
    }

    pub fn is_comment(&self) -> bool {
        self.kind.is_comment()
    }
}

/// Index of which source lines carry any token at all.
///
/// Used by the group partitioner to distinguish fully blank lines from lines
/// occupied by unrelated code or comments. Multi-line tokens (block comments)
/// occupy every line they span.
#[derive(Debug, Clone, Default)]
pub struct LineIndex {
    occupied: BTreeSet<u32>,
}

impl LineIndex {
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut occupied = BTreeSet::new();
        for tok in tokens {
            let extra_lines = tok.lexeme.matches('\n').count() as u32;
            for line in tok.pos.line..=tok.pos.line + extra_lines {
                occupied.insert(line);
            }
        }
        Self { occupied }
    }

    pub fn is_blank(&self, line: u32) -> bool {
        !self.occupied.contains(&line)
    }

    /// True if any fully blank line lies strictly between `a` and `b`.
    pub fn blank_between(&self, a: u32, b: u32) -> bool {
        (a + 1..b).any(|line| self.is_blank(line))
    }

    /// True if any token occupies a line strictly between `a` and `b`.
    pub fn code_between(&self, a: u32, b: u32) -> bool {
        (a + 1..b).any(|line| !self.is_blank(line))
    }
}
