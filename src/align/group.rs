//! Alignment group partitioning.

use crate::construct::{PosTok, ScopeId};
use crate::token::LineIndex;

/// One aligned construct as the group partitioner sees it: the scope that
/// owns it, the lines it spans, and the anchor token whose column is
/// compared.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub scope: ScopeId,
    pub start_line: u32,
    pub end_line: u32,
    pub anchor: PosTok,
}

/// Partition `members` (pre-sorted by position) into maximal contiguous
/// alignment groups.
///
/// A group breaks when the scope changes, or when any line lies strictly
/// between the previous member's last line and the next member's first line,
/// be it fully blank or occupied by unrelated code. A member that starts on
/// the same line as its predecessor joins neither comparison nor a new
/// group; it only extends the span adjacency is measured from.
pub fn partition(members: Vec<Member>, lines: &LineIndex) -> Vec<Vec<Member>> {
    let mut groups: Vec<Vec<Member>> = Vec::new();
    let mut prev_end: u32 = 0;
    for m in members {
        if let Some(group) = groups.last_mut() {
            if let Some(last) = group.last() {
                if last.scope == m.scope {
                    if m.start_line == last.start_line {
                        prev_end = prev_end.max(m.end_line);
                        continue;
                    }
                    let contiguous = !lines.blank_between(prev_end, m.start_line)
                        && !lines.code_between(prev_end, m.start_line);
                    if contiguous {
                        prev_end = prev_end.max(m.end_line);
                        group.push(m);
                        continue;
                    }
                }
            }
        }
        prev_end = m.end_line;
        groups.push(vec![m]);
    }
    groups
}
