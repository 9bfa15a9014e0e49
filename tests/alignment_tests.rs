//! Per-category acceptance tests for the vertical alignment facet.

mod common;

use common::{check_category_only, check_with, MISALIGNED, PROPERLY_ALIGNED};
use plumbline::{AlignmentCategory, CategorySet, CheckConfig};

fn assert_category(category: AlignmentCategory, expected: &str) {
    assert!(
        check_category_only(category, PROPERLY_ALIGNED).is_empty(),
        "{category} flagged the aligned fixture"
    );
    assert_eq!(check_category_only(category, MISALIGNED), vec![expected]);
}

#[test]
fn assignments() {
    assert_category(
        AlignmentCategory::Assignments,
        "21x14: '=' should be aligned with '=' in line 20",
    );
}

#[test]
fn case_group_statements() {
    assert_category(
        AlignmentCategory::CaseGroupStatements,
        "25x19: 'x' should be aligned with 'break' in line 24",
    );
}

#[test]
fn field_initializer() {
    assert_category(
        AlignmentCategory::FieldInitializer,
        "7x21: '=' should be aligned with '=' in line 6",
    );
}

#[test]
fn field_name() {
    assert_category(
        AlignmentCategory::FieldName,
        "4x13: 'field2' should be aligned with 'field1' in line 3",
    );
}

#[test]
fn local_var_initializer() {
    assert_category(
        AlignmentCategory::LocalVarInitializer,
        "18x26: '=' should be aligned with '=' in line 17",
    );
}

#[test]
fn local_var_name() {
    assert_category(
        AlignmentCategory::LocalVarName,
        "15x17: 'locvar2' should be aligned with 'locvar1' in line 14",
    );
}

#[test]
fn method_body() {
    assert_category(
        AlignmentCategory::MethodBody,
        "33x34: '{' should be aligned with '{' in line 32",
    );
}

#[test]
fn method_name() {
    assert_category(
        AlignmentCategory::MethodName,
        "30x18: 'meth2' should be aligned with 'meth1' in line 29",
    );
}

#[test]
fn parameter_name() {
    assert_category(
        AlignmentCategory::ParameterName,
        "11x14: 'param2' should be aligned with 'param1' in line 10",
    );
}

#[test]
fn all_deviators_cite_the_original_first_member() {
    let src = "class A {\n    int a = 1;\n     int b = 2;\n     int c = 3;\n}";
    let violations = check_category_only(AlignmentCategory::FieldName, src);
    assert_eq!(
        violations,
        vec![
            "3x10: 'b' should be aligned with 'a' in line 2",
            "4x10: 'c' should be aligned with 'a' in line 2",
        ]
    );
}

#[test]
fn blank_line_starts_a_fresh_group() {
    let src = "class A {\n    int a = 1;\n\n     int b = 2;\n     int c = 3;\n}";
    assert!(check_category_only(AlignmentCategory::FieldName, src).is_empty());
}

#[test]
fn intervening_code_starts_a_fresh_group() {
    // the method between the fields occupies line 3
    let src = "class A {\n    int a = 1;\n    void m() {}\n     int b = 2;\n}";
    assert!(check_category_only(AlignmentCategory::FieldName, src).is_empty());
}

#[test]
fn nested_scopes_never_share_a_group() {
    // the inner class field sits in its own scope despite line adjacency
    let src = "class A {\n    int a = 1;\n    class B {\n     int b = 2;\n    }\n}";
    assert!(check_category_only(AlignmentCategory::FieldName, src).is_empty());
}

#[test]
fn singleton_groups_are_silent() {
    let src = "class A {\n    int lonely = 1;\n}";
    assert!(check_category_only(AlignmentCategory::FieldName, src).is_empty());
    assert!(check_category_only(AlignmentCategory::FieldInitializer, src).is_empty());
}

#[test]
fn one_line_locals_are_skipped_not_compared() {
    // two declarations on one line; the second never joins the comparison
    let src = "class A {\n    void m() {\n        int a = 1; int z = 2;\n        int b = 3;\n    }\n}";
    assert!(check_category_only(AlignmentCategory::LocalVarName, src).is_empty());
}

#[test]
fn full_alignment_config_reports_every_deviator_sorted() {
    let config = CheckConfig::alignment_only(CategorySet::all());
    let violations = check_with(&config, MISALIGNED);
    assert_eq!(
        violations,
        vec![
            "4x13: 'field2' should be aligned with 'field1' in line 3",
            "7x21: '=' should be aligned with '=' in line 6",
            "11x14: 'param2' should be aligned with 'param1' in line 10",
            "15x17: 'locvar2' should be aligned with 'locvar1' in line 14",
            "18x26: '=' should be aligned with '=' in line 17",
            "21x14: '=' should be aligned with '=' in line 20",
            "25x19: 'x' should be aligned with 'break' in line 24",
            "30x18: 'meth2' should be aligned with 'meth1' in line 29",
            "33x34: '{' should be aligned with '{' in line 32",
        ]
    );
    assert!(check_with(&config, PROPERLY_ALIGNED).is_empty());
}

#[test]
fn checking_twice_yields_identical_reports() {
    let config = CheckConfig::alignment_only(CategorySet::all());
    assert_eq!(check_with(&config, MISALIGNED), check_with(&config, MISALIGNED));
}
