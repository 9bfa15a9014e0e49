//! Acceptance tests for the trailing comment column facet.

mod common;

use common::check_with;
use plumbline::CheckConfig;

fn check(source: &str) -> Vec<String> {
    check_with(&CheckConfig::comments_only(), source)
}

#[test]
fn aligned_trailing_comments_pass() {
    let src = concat!(
        "class A {\n",
        "    int a;     // alpha\n",
        "    int bb;    // beta\n",
        "    int ccc;   // gamma\n",
        "}\n",
    );
    assert!(check(src).is_empty());
}

#[test]
fn deviating_comment_is_flagged_against_the_first() {
    let src = concat!(
        "class A {\n",
        "    int a;     // alpha\n",
        "    int bb;      // beta\n",
        "}\n",
    );
    assert_eq!(
        check(src),
        vec!["3x18: C++ comment must appear on column 16, not 18"]
    );
}

#[test]
fn code_reaching_the_column_moves_the_expectation() {
    let src = concat!(
        "class A {\n",
        "    int a;     // alpha\n",
        "    int bbbbbbbbb;// beta\n",
        "}\n",
    );
    assert_eq!(
        check(src),
        vec!["2x16: C++ comment must appear on column 19, not 16"]
    );
}

#[test]
fn runs_break_at_lines_without_trailing_comments() {
    let src = concat!(
        "class A {\n",
        "    int a;  // alpha\n",
        "    int b;\n",
        "    int c;      // gamma\n",
        "}\n",
    );
    assert!(check(src).is_empty());
}

#[test]
fn full_line_comments_are_not_members() {
    let src = concat!(
        "class A {\n",
        "    int a;  // alpha\n",
        "    // standalone\n",
        "    int c;      // gamma\n",
        "}\n",
    );
    assert!(check(src).is_empty());
}

#[test]
fn block_comments_are_not_members() {
    let src = concat!(
        "class A {\n",
        "    int a;  /* alpha */\n",
        "    int c;      // gamma\n",
        "}\n",
    );
    assert!(check(src).is_empty());
}

#[test]
fn report_is_sorted_and_stable() {
    let src = concat!(
        "class A {\n",
        "    int a;   // one\n",
        "    int b;     // two\n",
        "    int c;       // three\n",
        "}\n",
    );
    let first = check(src);
    assert_eq!(first.len(), 2);
    assert!(first[0].starts_with("3x"));
    assert!(first[1].starts_with("4x"));
    assert_eq!(first, check(src));
}
