//! The vertical alignment facet.
//!
//! For one category at a time: project the constructs onto group members,
//! partition the members into contiguous groups, then verify every member's
//! anchor column against the group's first member.

pub mod group;
pub mod verify;

use crate::category::AlignmentCategory;
use crate::construct::{Construct, PosTok, ScopeId};
use crate::errors::{input_error, CheckError, ErrorKind};
use crate::token::LineIndex;
use crate::violation::Violation;

pub use group::Member;

fn member(scope: ScopeId, start_line: u32, end_line: u32, anchor: &PosTok) -> Member {
    Member {
        scope,
        start_line,
        end_line,
        anchor: anchor.clone(),
    }
}

/// Project the constructs onto the members of one category, in source order.
///
/// Constructs without the category's anchor token (a field with no
/// initializer, an abstract method with no body) are simply absent from the
/// result. An anchor that is present but empty breaks the input contract and
/// aborts instead.
pub fn members_of(
    category: AlignmentCategory,
    constructs: &[Construct],
) -> Result<Vec<Member>, CheckError> {
    let mut members = Vec::new();
    for construct in constructs {
        match (category, construct) {
            (AlignmentCategory::Assignments, Construct::Assignment(a)) => {
                members.push(member(a.scope, a.start_line, a.end_line, &a.eq));
            }
            (AlignmentCategory::CaseGroupStatements, Construct::CaseGroup(g)) => {
                members.push(member(g.switch, g.start_line, g.end_line, &g.first_stmt));
            }
            (AlignmentCategory::FieldInitializer, Construct::Field(f)) => {
                if let Some(eq) = &f.init_eq {
                    members.push(member(f.scope, f.start_line, f.end_line, eq));
                }
            }
            (AlignmentCategory::FieldName, Construct::Field(f)) => {
                members.push(member(f.scope, f.start_line, f.end_line, &f.name));
            }
            (AlignmentCategory::LocalVarInitializer, Construct::LocalVar(v)) => {
                if let Some(eq) = &v.init_eq {
                    members.push(member(v.scope, v.start_line, v.end_line, eq));
                }
            }
            (AlignmentCategory::LocalVarName, Construct::LocalVar(v)) => {
                members.push(member(v.scope, v.start_line, v.end_line, &v.name));
            }
            (AlignmentCategory::MethodBody, Construct::Method(m)) => {
                if let Some(open) = &m.body_open {
                    members.push(member(m.scope, m.start_line, m.end_line, open));
                }
            }
            (AlignmentCategory::MethodName, Construct::Method(m)) => {
                members.push(member(m.scope, m.start_line, m.end_line, &m.name));
            }
            (AlignmentCategory::ParameterName, Construct::Param(p)) => {
                members.push(member(
                    p.list,
                    p.first.pos.line,
                    p.name.pos.line,
                    &p.name,
                ));
            }
            _ => {}
        }
    }
    for m in &members {
        if m.anchor.text.is_empty() || m.anchor.pos.line == 0 || m.anchor.pos.col == 0 {
            return Err(input_error(ErrorKind::MissingAnchor {
                category: category.name().to_string(),
            }));
        }
    }
    members.sort_by_key(|m| (m.start_line, m.anchor.pos));
    Ok(members)
}

/// Run one category over the constructs of a file.
pub fn check_category(
    category: AlignmentCategory,
    constructs: &[Construct],
    lines: &LineIndex,
) -> Result<Vec<Violation>, CheckError> {
    let members = members_of(category, constructs)?;
    let groups = group::partition(members, lines);
    Ok(verify::verify(&groups))
}
