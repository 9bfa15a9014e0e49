//! Style violations, the ordinary product of a scan.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::token::Pos;

/// One detected style deviation. Violations never abort a run; a scan always
/// completes its file and returns every violation it found.
///
/// The derived ordering is (line, column, message), which is the report
/// order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Violation {
    pub line: u32,
    pub col: u32,
    pub message: String,
}

impl Violation {
    pub fn new(pos: Pos, message: impl Into<String>) -> Self {
        Self {
            line: pos.line,
            col: pos.col,
            message: message.into(),
        }
    }

    pub fn pos(&self) -> Pos {
        Pos::new(self.line, self.col)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}: {}", self.line, self.col, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_line_x_column_prefix() {
        let v = Violation::new(Pos::new(7, 21), "'=' should be aligned with '=' in line 6");
        assert_eq!(v.to_string(), "7x21: '=' should be aligned with '=' in line 6");
    }

    #[test]
    fn orders_by_line_then_column() {
        let mut vs = vec![
            Violation::new(Pos::new(3, 9), "b"),
            Violation::new(Pos::new(2, 40), "a"),
            Violation::new(Pos::new(3, 2), "c"),
        ];
        vs.sort();
        assert_eq!(vs[0].message, "a");
        assert_eq!(vs[1].message, "c");
        assert_eq!(vs[2].message, "b");
    }
}
