//! Column verification within alignment groups.

use crate::align::group::Member;
use crate::violation::Violation;

/// Compare every group member against the group's first member.
///
/// The first member is the anchor for the whole group; later deviators do
/// not shift the expectation for the members after them.
pub fn verify(groups: &[Vec<Member>]) -> Vec<Violation> {
    let mut violations = Vec::new();
    for group in groups {
        let Some(first) = group.first() else { continue };
        let expected = first.anchor.pos.col;
        for member in &group[1..] {
            if member.anchor.pos.col != expected {
                violations.push(Violation::new(
                    member.anchor.pos,
                    format!(
                        "'{}' should be aligned with '{}' in line {}",
                        member.anchor.text, first.anchor.text, first.anchor.pos.line
                    ),
                ));
            }
        }
    }
    violations
}
