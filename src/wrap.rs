//! The wrap-style facet.
//!
//! Checks how method declarations and call argument lists break across
//! lines: whether the method name wraps after the return type, which column
//! a wrapped name lands in, and whether multi-line parameter and argument
//! lists put each entry on its own line.

use crate::config::{WrapBeforeName, WrapPolicy};
use crate::construct::{Construct, MethodDecl, MethodInvocation, PosTok};
use crate::violation::Violation;

/// Run the wrap rules over the constructs of a file.
pub fn check(constructs: &[Construct], policy: &WrapPolicy) -> Vec<Violation> {
    let mut violations = Vec::new();
    for construct in constructs {
        match construct {
            Construct::Method(m) => check_method(m, policy, &mut violations),
            Construct::Invocation(i) => check_invocation(i, policy, &mut violations),
            _ => {}
        }
    }
    violations
}

fn check_method(m: &MethodDecl, policy: &WrapPolicy, violations: &mut Vec<Violation>) {
    check_decl(m, policy, violations);
    if m.lparen.line != m.rparen.line && !policy.allow_multiple_parameters_per_line {
        let firsts: Vec<&PosTok> = m.params.iter().map(|p| &p.first).collect();
        check_entries(&firsts, violations);
    }
}

fn check_decl(m: &MethodDecl, policy: &WrapPolicy, violations: &mut Vec<Violation>) {
    // constructors have no return type to wrap after
    let Some(return_type) = &m.return_type else {
        return;
    };
    if m.start_line == m.end_line {
        // the whole declaration, body included, sits on one line
        if !policy.allow_one_line_decl {
            violations.push(must_wrap(&m.name));
        }
        return;
    }
    let wrapped = m.name.pos.line != m.return_type_end_line;
    match policy.wrap_decl_before_name {
        WrapBeforeName::Always if !wrapped => {
            violations.push(must_wrap(&m.name));
            return;
        }
        WrapBeforeName::Never if wrapped => {
            violations.push(Violation::new(
                m.name.pos,
                format!(
                    "'{}' must appear on same line as '{}'",
                    m.name.text, return_type.text
                ),
            ));
            return;
        }
        _ => {}
    }
    if wrapped && m.name.pos.col != m.decl_first.col {
        violations.push(Violation::new(
            m.name.pos,
            format!(
                "'{}' must appear in column {}, not {}",
                m.name.text, m.decl_first.col, m.name.pos.col
            ),
        ));
    }
}

fn check_invocation(i: &MethodInvocation, policy: &WrapPolicy, violations: &mut Vec<Violation>) {
    if i.lparen.line != i.rparen.line && !policy.allow_multiple_args_per_line {
        let firsts: Vec<&PosTok> = i.args.iter().collect();
        check_entries(&firsts, violations);
    }
}

/// In a multi-line list, every entry after the first must start on its own
/// line.
fn check_entries(firsts: &[&PosTok], violations: &mut Vec<Violation>) {
    for pair in firsts.windows(2) {
        let (prev, cur) = (pair[0], pair[1]);
        if cur.pos.line == prev.pos.line {
            violations.push(must_wrap(cur));
        }
    }
}

fn must_wrap(tok: &PosTok) -> Violation {
    Violation::new(tok.pos, format!("Must wrap line before '{}'", tok.text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construct::ParamDecl;
    use crate::token::Pos;

    fn method(
        decl_first: Pos,
        return_type: Option<(&str, Pos)>,
        rt_end_line: u32,
        name: (&str, Pos),
        span: (u32, u32),
    ) -> MethodDecl {
        MethodDecl {
            scope: 1,
            decl_first,
            return_type: return_type.map(|(t, p)| PosTok::new(p, t)),
            return_type_end_line: rt_end_line,
            name: PosTok::new(name.1, name.0),
            params: Vec::new(),
            lparen: Pos::new(name.1.line, name.1.col + name.0.chars().count() as u32),
            rparen: Pos::new(name.1.line, name.1.col + name.0.chars().count() as u32 + 1),
            body_open: Some(PosTok::new(Pos::new(span.1, 1), "{")),
            start_line: span.0,
            end_line: span.1,
        }
    }

    #[test]
    fn always_flags_unwrapped_name() {
        // int method() {
        //     ...spanning lines...
        let m = method(
            Pos::new(2, 5),
            Some(("int", Pos::new(2, 5))),
            2,
            ("method", Pos::new(2, 9)),
            (2, 4),
        );
        let vs = check(&[Construct::Method(m)], &WrapPolicy::default());
        assert_eq!(vs.len(), 1);
        assert_eq!(vs[0].to_string(), "2x9: Must wrap line before 'method'");
    }

    #[test]
    fn always_accepts_wrapped_name_in_decl_column() {
        let m = method(
            Pos::new(2, 5),
            Some(("int", Pos::new(2, 5))),
            2,
            ("method", Pos::new(3, 5)),
            (2, 5),
        );
        assert!(check(&[Construct::Method(m)], &WrapPolicy::default()).is_empty());
    }

    #[test]
    fn wrapped_name_in_wrong_column_is_flagged() {
        let m = method(
            Pos::new(2, 5),
            Some(("int", Pos::new(2, 5))),
            2,
            ("method", Pos::new(3, 6)),
            (2, 5),
        );
        let vs = check(&[Construct::Method(m)], &WrapPolicy::default());
        assert_eq!(vs.len(), 1);
        assert_eq!(
            vs[0].to_string(),
            "3x6: 'method' must appear in column 5, not 6"
        );
    }

    #[test]
    fn never_flags_wrapped_name() {
        let policy = WrapPolicy {
            wrap_decl_before_name: WrapBeforeName::Never,
            ..WrapPolicy::default()
        };
        let m = method(
            Pos::new(2, 5),
            Some(("int", Pos::new(2, 5))),
            2,
            ("method", Pos::new(3, 5)),
            (2, 5),
        );
        let vs = check(&[Construct::Method(m)], &policy);
        assert_eq!(vs.len(), 1);
        assert_eq!(
            vs[0].to_string(),
            "3x5: 'method' must appear on same line as 'int'"
        );
    }

    #[test]
    fn one_line_decl_is_exempt_by_default() {
        let m = method(
            Pos::new(2, 5),
            Some(("int", Pos::new(2, 5))),
            2,
            ("method", Pos::new(2, 9)),
            (2, 2),
        );
        assert!(check(&[Construct::Method(m)], &WrapPolicy::default()).is_empty());
    }

    #[test]
    fn one_line_decl_is_flagged_when_disallowed() {
        let policy = WrapPolicy {
            allow_one_line_decl: false,
            ..WrapPolicy::default()
        };
        let m = method(
            Pos::new(2, 5),
            Some(("int", Pos::new(2, 5))),
            2,
            ("method", Pos::new(2, 9)),
            (2, 2),
        );
        let vs = check(&[Construct::Method(m)], &policy);
        assert_eq!(vs.len(), 1);
        assert_eq!(vs[0].to_string(), "2x9: Must wrap line before 'method'");
    }

    #[test]
    fn constructors_skip_decl_wrap_checks() {
        let m = method(
            Pos::new(2, 5),
            None,
            2,
            ("Main", Pos::new(2, 5)),
            (2, 4),
        );
        assert!(check(&[Construct::Method(m)], &WrapPolicy::default()).is_empty());
    }

    #[test]
    fn two_params_on_one_line_of_multi_line_list() {
        let mut m = method(
            Pos::new(2, 5),
            Some(("void", Pos::new(2, 5))),
            2,
            ("meth", Pos::new(2, 10)),
            (2, 6),
        );
        m.lparen = Pos::new(2, 14);
        m.rparen = Pos::new(5, 5);
        m.params = vec![
            ParamDecl {
                list: 9,
                first: PosTok::new(Pos::new(3, 9), "String"),
                name: PosTok::new(Pos::new(3, 18), "a"),
            },
            ParamDecl {
                list: 9,
                first: PosTok::new(Pos::new(4, 9), "int"),
                name: PosTok::new(Pos::new(4, 13), "b"),
            },
            ParamDecl {
                list: 9,
                first: PosTok::new(Pos::new(4, 16), "int"),
                name: PosTok::new(Pos::new(4, 20), "c"),
            },
        ];
        let vs = check(&[Construct::Method(m)], &WrapPolicy::default());
        assert_eq!(vs.len(), 1);
        assert_eq!(vs[0].to_string(), "4x16: Must wrap line before 'int'");
    }

    #[test]
    fn single_line_param_list_is_never_checked() {
        let mut m = method(
            Pos::new(2, 5),
            Some(("void", Pos::new(2, 5))),
            2,
            ("meth", Pos::new(2, 10)),
            (2, 4),
        );
        // keep the decl itself wrapped-clean
        m.name = PosTok::new(Pos::new(3, 5), "meth");
        m.lparen = Pos::new(3, 9);
        m.rparen = Pos::new(3, 22);
        m.params = vec![
            ParamDecl {
                list: 9,
                first: PosTok::new(Pos::new(3, 10), "int"),
                name: PosTok::new(Pos::new(3, 14), "a"),
            },
            ParamDecl {
                list: 9,
                first: PosTok::new(Pos::new(3, 17), "int"),
                name: PosTok::new(Pos::new(3, 21), "b"),
            },
        ];
        assert!(check(&[Construct::Method(m)], &WrapPolicy::default()).is_empty());
    }

    #[test]
    fn two_args_on_one_line_of_multi_line_call() {
        let inv = MethodInvocation {
            scope: 3,
            lparen: Pos::new(4, 26),
            rparen: Pos::new(6, 9),
            args: vec![
                PosTok::new(Pos::new(5, 13), "\"%s%n\""),
                PosTok::new(Pos::new(5, 21), "\"HELLO\""),
            ],
        };
        let vs = check(&[Construct::Invocation(inv)], &WrapPolicy::default());
        assert_eq!(vs.len(), 1);
        assert_eq!(vs[0].to_string(), "5x21: Must wrap line before '\"HELLO\"'");
    }
}
