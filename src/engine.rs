//! The check engine.
//!
//! One invocation checks one file: validate the configuration, tokenize,
//! extract constructs, run every enabled facet, and return the violations in
//! report order. Violations never abort a run; only malformed input or an
//! invalid configuration does.

use crate::align;
use crate::category::AlignmentCategory;
use crate::comment;
use crate::config::CheckConfig;
use crate::errors::{CheckError, ErrorReporting, ScanContext, SourceContext};
use crate::extract::extract;
use crate::lexer::tokenize;
use crate::token::{LineIndex, Pos, Token};
use crate::violation::Violation;
use crate::wrap;

/// Check a source text with no file name attached.
pub fn check_source(source: &str, config: &CheckConfig) -> Result<Vec<Violation>, CheckError> {
    check_named_source("source", source, config)
}

/// Check a source text, attaching `name` to any diagnostic.
pub fn check_named_source(
    name: &str,
    source: &str,
    config: &CheckConfig,
) -> Result<Vec<Violation>, CheckError> {
    config.validate()?;
    let context = SourceContext::from_file(name, source);
    let tokens = tokenize(source, &context)?;
    check_tokens(&tokens, config, &context)
}

/// Check an already-tokenized stream. The entry point for callers with their
/// own token producer; the stream's positional invariants are validated
/// before anything else runs.
pub fn check_tokens(
    tokens: &[Token],
    config: &CheckConfig,
    context: &SourceContext,
) -> Result<Vec<Violation>, CheckError> {
    validate_stream(tokens, context)?;
    let lines = LineIndex::from_tokens(tokens);
    let constructs = extract(tokens, context)?;

    let mut violations = Vec::new();
    for category in AlignmentCategory::ALL {
        if config.categories.contains(category) {
            violations.extend(align::check_category(category, &constructs, &lines)?);
        }
    }
    if config.wrap_method {
        violations.extend(wrap::check(&constructs, &config.wrap));
    }
    if config.comment_alignment {
        violations.extend(comment::check(tokens));
    }
    violations.sort();
    Ok(violations)
}

/// Token positions must be 1-based and strictly increasing.
fn validate_stream(tokens: &[Token], context: &SourceContext) -> Result<(), CheckError> {
    let ctx = ScanContext::new(context.clone(), "input");
    let mut prev: Option<Pos> = None;
    for tok in tokens {
        if tok.pos.line == 0 || tok.pos.col == 0 {
            let span = context.span_at(Pos::new(1, 1), 1);
            return Err(ctx.inconsistent_stream(
                &format!("token '{}' carries a 0-based position", tok.lexeme),
                span,
            ));
        }
        if let Some(prev) = prev {
            if tok.pos <= prev {
                let span = context.span_at(tok.pos, 1);
                return Err(ctx.inconsistent_stream(
                    &format!("token at {} does not advance past {}", tok.pos, prev),
                    span,
                ));
            }
        }
        prev = Some(tok.pos);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCategory;
    use crate::token::TokenKind;

    #[test]
    fn violations_come_out_sorted_by_position() {
        let src = "class A {\n    int a  = 1;\n    int bb  = 2;\n}";
        let violations = check_source(src, &CheckConfig::default()).unwrap();
        let positions: Vec<Pos> = violations.iter().map(|v| v.pos()).collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn disabled_facets_stay_silent() {
        // the unaligned fields would be reported if the category were on
        let src = "class A {\n    int a = 1;\n    int bbb = 2;\n}";
        let config = CheckConfig {
            categories: crate::category::CategorySet::empty(),
            wrap_method: false,
            comment_alignment: true,
            ..CheckConfig::default()
        };
        assert!(check_source(src, &config).unwrap().is_empty());
    }

    #[test]
    fn all_off_config_is_rejected_up_front() {
        let config = CheckConfig {
            categories: crate::category::CategorySet::empty(),
            wrap_method: false,
            comment_alignment: false,
            ..CheckConfig::default()
        };
        let err = check_source("class A {}", &config).unwrap_err();
        assert_eq!(err.kind.category(), ErrorCategory::Config);
    }

    #[test]
    fn non_monotonic_stream_is_rejected() {
        let context = SourceContext::from_file("t.java", "a b");
        let tokens = vec![
            Token::new(TokenKind::Identifier, "a", Pos::new(1, 3)),
            Token::new(TokenKind::Identifier, "b", Pos::new(1, 1)),
        ];
        let err = check_tokens(&tokens, &CheckConfig::default(), &context).unwrap_err();
        assert_eq!(err.kind.category(), ErrorCategory::Input);
    }

    #[test]
    fn zero_based_position_is_rejected() {
        let context = SourceContext::from_file("t.java", "a");
        let tokens = vec![Token::new(TokenKind::Identifier, "a", Pos::new(1, 0))];
        let err = check_tokens(&tokens, &CheckConfig::default(), &context).unwrap_err();
        assert_eq!(err.kind.category(), ErrorCategory::Input);
    }

    #[test]
    fn checking_is_idempotent() {
        let src = "class A {\n    int a    = 1;\n    int bb = 2;\n}";
        let config = CheckConfig::default();
        let first = check_source(src, &config).unwrap();
        let second = check_source(src, &config).unwrap();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}
