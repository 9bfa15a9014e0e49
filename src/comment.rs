//! The comment-column facet.
//!
//! Aligns trailing `//` comments: in every run of consecutive lines that end
//! in a trailing comment, all comments must start in the same column. The
//! first line's comment column is the expectation, unless some line's code
//! reaches into that column; then the expectation moves to the first column
//! right of the longest code line in the run.

use crate::token::Token;
use crate::violation::Violation;

#[derive(Debug, Clone)]
struct TrailingComment {
    line: u32,
    col: u32,
    code_end: u32,
}

/// Run the comment alignment rule over the raw token stream.
pub fn check(tokens: &[Token]) -> Vec<Violation> {
    let members = trailing_comments(tokens);
    let mut violations = Vec::new();
    for run in runs(&members) {
        verify_run(run, &mut violations);
    }
    violations
}

/// Lines carrying a `//` comment preceded by code on the same line, with the
/// last column that code occupies.
fn trailing_comments(tokens: &[Token]) -> Vec<TrailingComment> {
    let mut members: Vec<TrailingComment> = Vec::new();
    let mut code_end_on_line: Option<(u32, u32)> = None;
    for tok in tokens {
        if tok.is_comment() {
            if tok.lexeme.starts_with("//") {
                if let Some((line, code_end)) = code_end_on_line {
                    if line == tok.pos.line {
                        members.push(TrailingComment {
                            line,
                            col: tok.pos.col,
                            code_end,
                        });
                    }
                }
            }
            continue;
        }
        code_end_on_line = match code_end_on_line {
            Some((line, end)) if line == tok.pos.line => Some((line, end.max(tok.end_col()))),
            _ => Some((tok.pos.line, tok.end_col())),
        };
    }
    members
}

fn runs(members: &[TrailingComment]) -> impl Iterator<Item = &[TrailingComment]> {
    members.chunk_by(|a, b| b.line == a.line + 1)
}

fn verify_run(run: &[TrailingComment], violations: &mut Vec<Violation>) {
    let Some(first) = run.first() else { return };
    let mut expected = first.col;
    if run.iter().any(|m| m.code_end >= expected) {
        let longest = run.iter().map(|m| m.code_end).max().unwrap_or(0);
        expected = longest + 1;
    }
    for m in run {
        if m.col != expected {
            violations.push(Violation::new(
                crate::token::Pos::new(m.line, m.col),
                format!(
                    "C++ comment must appear on column {}, not {}",
                    expected, m.col
                ),
            ));
        }
    }
}
