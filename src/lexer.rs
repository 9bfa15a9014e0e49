//! Reference token producer.
//!
//! Tokenizes a Java-like surface syntax into the `token` model: identifiers,
//! keywords, literals, operators, punctuation, and comments, all with 1-based
//! (line, column) positions where columns count characters. This is the
//! bundled stand-in for the external syntax producer; the engine proper only
//! consumes the resulting token stream and works just as well with tokens
//! supplied by any other front end.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::errors::{CheckError, ErrorReporting, ScanContext, SourceContext};
use crate::token::{Pos, Token, TokenKind};

static KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "abstract",
        "assert",
        "boolean",
        "break",
        "byte",
        "case",
        "catch",
        "char",
        "class",
        "const",
        "continue",
        "default",
        "do",
        "double",
        "else",
        "enum",
        "extends",
        "final",
        "finally",
        "float",
        "for",
        "goto",
        "if",
        "implements",
        "import",
        "instanceof",
        "int",
        "interface",
        "long",
        "native",
        "new",
        "package",
        "private",
        "protected",
        "public",
        "return",
        "short",
        "static",
        "strictfp",
        "super",
        "switch",
        "synchronized",
        "this",
        "throw",
        "throws",
        "transient",
        "try",
        "void",
        "volatile",
        "while",
    ]
    .into_iter()
    .collect()
});

const FOUR_CHAR_OPS: [&str; 1] = [">>>="];
const THREE_CHAR_OPS: [&str; 3] = ["<<=", ">>=", ">>>"];
const TWO_CHAR_OPS: [&str; 19] = [
    "==", "!=", "<=", ">=", "&&", "||", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=",
    "<<", ">>", "->",
];
const SINGLE_OPS: &str = "+-*/%=!<>&|^~?";
const PUNCTS: &str = "(){}[];,.:@";

/// Tokenize `source` into an ordered token stream.
///
/// Fails on the first unterminated literal/comment or unlexable character;
/// partial recovery would desynchronize every downstream line number.
pub fn tokenize(source: &str, context: &SourceContext) -> Result<Vec<Token>, CheckError> {
    Lexer::new(source, context).run()
}

struct Lexer<'s> {
    src: &'s str,
    chars: Vec<(usize, char)>,
    i: usize,
    line: u32,
    col: u32,
    ctx: ScanContext,
}

impl<'s> Lexer<'s> {
    fn new(src: &'s str, context: &SourceContext) -> Self {
        Self {
            src,
            chars: src.char_indices().collect(),
            i: 0,
            line: 1,
            col: 1,
            ctx: ScanContext::new(context.clone(), "lex"),
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.i).map(|&(_, c)| c)
    }

    fn peek_at(&self, ahead: usize) -> Option<char> {
        self.chars.get(self.i + ahead).map(|&(_, c)| c)
    }

    fn offset(&self) -> usize {
        self.chars
            .get(self.i)
            .map(|&(o, _)| o)
            .unwrap_or(self.src.len())
    }

    fn bump(&mut self) -> Option<char> {
        let &(_, c) = self.chars.get(self.i)?;
        self.i += 1;
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    fn run(mut self) -> Result<Vec<Token>, CheckError> {
        let mut tokens = Vec::new();
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.bump();
                continue;
            }

            let start = self.offset();
            let pos = Pos::new(self.line, self.col);

            if c == '/' && self.peek_at(1) == Some('/') {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.bump();
                }
                tokens.push(self.token(TokenKind::LineComment, start, pos));
            } else if c == '/' && self.peek_at(1) == Some('*') {
                self.block_comment(pos)?;
                tokens.push(self.token(TokenKind::BlockComment, start, pos));
            } else if c == '"' {
                self.quoted('"', "string literal", pos)?;
                tokens.push(self.token(TokenKind::Str, start, pos));
            } else if c == '\'' {
                self.quoted('\'', "character literal", pos)?;
                tokens.push(self.token(TokenKind::CharLit, start, pos));
            } else if c.is_alphabetic() || c == '_' || c == '$' {
                while self
                    .peek()
                    .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$')
                {
                    self.bump();
                }
                let kind = if KEYWORDS.contains(&self.src[start..self.offset()]) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Identifier
                };
                tokens.push(self.token(kind, start, pos));
            } else if c.is_ascii_digit() {
                while self
                    .peek()
                    .is_some_and(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_')
                {
                    self.bump();
                }
                tokens.push(self.token(TokenKind::Number, start, pos));
            } else if c == ':' && self.peek_at(1) == Some(':') {
                self.bump();
                self.bump();
                tokens.push(self.token(TokenKind::Operator, start, pos));
            } else if PUNCTS.contains(c) {
                self.bump();
                tokens.push(self.token(TokenKind::Punct, start, pos));
            } else if SINGLE_OPS.contains(c) {
                let len = self.operator_len();
                for _ in 0..len {
                    self.bump();
                }
                tokens.push(self.token(TokenKind::Operator, start, pos));
            } else {
                let span = self.ctx.source.span_at(pos, 1);
                return Err(self.ctx.unexpected_char(c, span));
            }
        }
        Ok(tokens)
    }

    fn token(&self, kind: TokenKind, start: usize, pos: Pos) -> Token {
        Token::new(kind, &self.src[start..self.offset()], pos)
    }

    /// Maximal-munch length of the operator starting at the cursor.
    fn operator_len(&self) -> usize {
        let ahead: String = (0..4).filter_map(|k| self.peek_at(k)).collect();
        for op in FOUR_CHAR_OPS {
            if ahead.starts_with(op) {
                return 4;
            }
        }
        for op in THREE_CHAR_OPS {
            if ahead.starts_with(op) {
                return 3;
            }
        }
        for op in TWO_CHAR_OPS {
            if ahead.starts_with(op) {
                return 2;
            }
        }
        1
    }

    fn block_comment(&mut self, pos: Pos) -> Result<(), CheckError> {
        self.bump();
        self.bump();
        loop {
            match self.peek() {
                Some('*') if self.peek_at(1) == Some('/') => {
                    self.bump();
                    self.bump();
                    return Ok(());
                }
                Some(_) => {
                    self.bump();
                }
                None => {
                    let span = self.ctx.source.span_at(pos, 2);
                    return Err(self.ctx.unterminated("block comment", span));
                }
            }
        }
    }

    fn quoted(&mut self, quote: char, what: &str, pos: Pos) -> Result<(), CheckError> {
        self.bump();
        loop {
            match self.peek() {
                Some('\\') => {
                    self.bump();
                    self.bump();
                }
                Some(c) if c == quote => {
                    self.bump();
                    return Ok(());
                }
                Some('\n') | None => {
                    let span = self.ctx.source.span_at(pos, 1);
                    return Err(self.ctx.unterminated(what, span));
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
    }
}
