//! Plumbline error handling.
//!
//! A single error type covers the two fatal taxonomies of a check run:
//! malformed input (lexing/extraction failures that would desynchronize line
//! numbering) and invalid configuration. Style violations are never errors;
//! they are the ordinary product of a scan (see `violation`).

use std::fmt;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceSpan};

use crate::token::Pos;

// ============================================================================
// SOURCE CONTEXT - Error reporting infrastructure
// ============================================================================

/// Source context for error reporting: the checked file's name and content.
#[derive(Debug, Clone)]
pub struct SourceContext {
    pub name: String,
    pub content: String,
}

impl SourceContext {
    /// Create a source context from real file content.
    pub fn from_file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Create a fallback when no source is available, e.g. for configuration
    /// errors raised before any file is read.
    pub fn fallback(context: &str) -> Self {
        Self {
            name: "config".to_string(),
            content: format!("# {}", context),
        }
    }

    pub fn to_named_source(&self) -> Arc<NamedSource<String>> {
        Arc::new(NamedSource::new(self.name.clone(), self.content.clone()))
    }

    /// Map a 1-based (line, column) position to a byte span of `len_chars`
    /// characters for miette labeling. Saturates at end of content.
    pub fn span_at(&self, pos: Pos, len_chars: usize) -> SourceSpan {
        let mut offset = 0usize;
        for (idx, line) in self.content.split('\n').enumerate() {
            if idx as u32 + 1 == pos.line {
                offset += line
                    .chars()
                    .take(pos.col.saturating_sub(1) as usize)
                    .map(|c| c.len_utf8())
                    .sum::<usize>();
                let len: usize = self.content[offset..]
                    .chars()
                    .take(len_chars)
                    .map(|c| c.len_utf8())
                    .sum();
                return SourceSpan::from(offset..offset + len);
            }
            offset += line.len() + 1;
        }
        SourceSpan::from(self.content.len()..self.content.len())
    }
}

impl Default for SourceContext {
    fn default() -> Self {
        Self::fallback("default context")
    }
}

/// The single error type - essential data only, no wrapper hierarchy.
#[derive(Debug)]
pub struct CheckError {
    /// What went wrong (type-specific data)
    pub kind: ErrorKind,
    /// Where it happened (context-specific source information)
    pub source_info: SourceInfo,
    /// How to help (auto-populated based on context)
    pub diagnostic_info: DiagnosticInfo,
}

/// All fatal error kinds as a clean enum.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    // Lex errors - the token producer could not tokenize the file
    UnexpectedChar {
        found: char,
    },
    UnterminatedLiteral {
        literal_type: String,
    },

    // Extraction errors - the construct pass met a truncated or unbalanced
    // declaration and cannot continue without desynchronizing line numbers
    UnexpectedEnd {
        expected: String,
    },
    UnbalancedDelimiter {
        delimiter: String,
    },

    // Input-contract errors - a caller-supplied stream broke its invariants
    InconsistentStream {
        detail: String,
    },
    MissingAnchor {
        category: String,
    },

    // Configuration errors - rejected before any scan starts
    InvalidPolicy {
        option: String,
        value: String,
    },
    InvalidConfig {
        detail: String,
    },
}

/// Context-specific source information
#[derive(Debug, Clone)]
pub struct SourceInfo {
    pub source: Arc<NamedSource<String>>,
    pub primary_span: SourceSpan,
    pub phase: String,
}

/// Diagnostic enhancement data
#[derive(Debug, Clone)]
pub struct DiagnosticInfo {
    pub help: Option<String>,
    pub error_code: String,
}

/// Context-aware error creation - each scan phase knows how to create
/// appropriately coded errors.
pub trait ErrorReporting {
    fn report(&self, kind: ErrorKind, span: SourceSpan) -> CheckError;

    fn unexpected_char(&self, found: char, span: SourceSpan) -> CheckError {
        self.report(ErrorKind::UnexpectedChar { found }, span)
    }

    fn unterminated(&self, literal_type: &str, span: SourceSpan) -> CheckError {
        self.report(
            ErrorKind::UnterminatedLiteral {
                literal_type: literal_type.into(),
            },
            span,
        )
    }

    fn unexpected_end(&self, expected: &str, span: SourceSpan) -> CheckError {
        self.report(
            ErrorKind::UnexpectedEnd {
                expected: expected.into(),
            },
            span,
        )
    }

    fn unbalanced(&self, delimiter: &str, span: SourceSpan) -> CheckError {
        self.report(
            ErrorKind::UnbalancedDelimiter {
                delimiter: delimiter.into(),
            },
            span,
        )
    }

    fn inconsistent_stream(&self, detail: &str, span: SourceSpan) -> CheckError {
        self.report(
            ErrorKind::InconsistentStream {
                detail: detail.into(),
            },
            span,
        )
    }
}

impl ErrorKind {
    /// Get the error category for test assertions
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnexpectedChar { .. } | Self::UnterminatedLiteral { .. } => ErrorCategory::Lex,

            Self::UnexpectedEnd { .. } | Self::UnbalancedDelimiter { .. } => ErrorCategory::Extract,

            Self::InconsistentStream { .. } | Self::MissingAnchor { .. } => ErrorCategory::Input,

            Self::InvalidPolicy { .. } | Self::InvalidConfig { .. } => ErrorCategory::Config,
        }
    }

    /// Get error code suffix for diagnostic codes
    pub const fn code_suffix(&self) -> &'static str {
        match self {
            Self::UnexpectedChar { .. } => "unexpected_char",
            Self::UnterminatedLiteral { .. } => "unterminated_literal",
            Self::UnexpectedEnd { .. } => "unexpected_end",
            Self::UnbalancedDelimiter { .. } => "unbalanced_delimiter",
            Self::InconsistentStream { .. } => "inconsistent_stream",
            Self::MissingAnchor { .. } => "missing_anchor",
            Self::InvalidPolicy { .. } => "invalid_policy",
            Self::InvalidConfig { .. } => "invalid_config",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lex,
    Extract,
    Input,
    Config,
}

impl std::error::Error for CheckError {}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::UnexpectedChar { found } => {
                write!(f, "Lex error: unexpected character '{}'", found)
            }
            ErrorKind::UnterminatedLiteral { literal_type } => {
                write!(f, "Lex error: unterminated {}", literal_type)
            }
            ErrorKind::UnexpectedEnd { expected } => {
                write!(
                    f,
                    "Extraction error: expected {} before end of input",
                    expected
                )
            }
            ErrorKind::UnbalancedDelimiter { delimiter } => {
                write!(f, "Extraction error: unbalanced '{}'", delimiter)
            }
            ErrorKind::InconsistentStream { detail } => {
                write!(f, "Input error: inconsistent token stream: {}", detail)
            }
            ErrorKind::MissingAnchor { category } => {
                write!(
                    f,
                    "Input error: construct lacks the anchor token required by category '{}'",
                    category
                )
            }
            ErrorKind::InvalidPolicy { option, value } => {
                write!(f, "Config error: invalid value '{}' for '{}'", value, option)
            }
            ErrorKind::InvalidConfig { detail } => {
                write!(f, "Config error: {}", detail)
            }
        }
    }
}

impl Diagnostic for CheckError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(&self.diagnostic_info.error_code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diagnostic_info
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = vec![LabeledSpan::new_with_span(
            Some(self.primary_label()),
            self.source_info.primary_span,
        )];
        Some(Box::new(labels.into_iter()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&*self.source_info.source)
    }
}

impl CheckError {
    fn primary_label(&self) -> String {
        match &self.kind {
            ErrorKind::UnexpectedChar { .. } => "unexpected character".into(),
            ErrorKind::UnterminatedLiteral { .. } => "starts here".into(),
            ErrorKind::UnexpectedEnd { .. } => "input ends here".into(),
            ErrorKind::UnbalancedDelimiter { .. } => "unbalanced delimiter".into(),
            ErrorKind::InconsistentStream { .. } => "inconsistent here".into(),
            ErrorKind::MissingAnchor { .. } => "anchor missing".into(),
            ErrorKind::InvalidPolicy { .. } => "invalid policy value".into(),
            ErrorKind::InvalidConfig { .. } => "invalid configuration".into(),
        }
    }
}

/// Creates a placeholder span for errors not tied to a specific source code
/// location, such as configuration errors raised before any scan.
pub fn unspanned() -> SourceSpan {
    SourceSpan::from(0..0)
}

/// Standalone constructor for errors with no file context of their own,
/// raised outside any scan phase. Ensures `CheckError` structs are not
/// assembled manually at those boundaries.
fn detached_error(phase: &str, kind: ErrorKind) -> CheckError {
    let ctx = SourceContext::fallback(phase);
    CheckError {
        diagnostic_info: DiagnosticInfo {
            help: None,
            error_code: format!("plumbline::{}::{}", phase, kind.code_suffix()),
        },
        source_info: SourceInfo {
            source: ctx.to_named_source(),
            primary_span: unspanned(),
            phase: phase.into(),
        },
        kind,
    }
}

/// Configuration errors, rejected before any scan starts.
pub fn config_error(kind: ErrorKind) -> CheckError {
    detached_error("config", kind)
}

/// Input-contract errors from caller-supplied constructs or token streams.
pub fn input_error(kind: ErrorKind) -> CheckError {
    detached_error("input", kind)
}

/// General-purpose error creation context carried through a scan phase.
pub struct ScanContext {
    pub source: SourceContext,
    pub phase: String,
}

impl ScanContext {
    pub fn new(source: SourceContext, phase: impl Into<String>) -> Self {
        Self {
            source,
            phase: phase.into(),
        }
    }
}

impl ErrorReporting for ScanContext {
    fn report(&self, kind: ErrorKind, span: SourceSpan) -> CheckError {
        let error_code = format!("plumbline::{}::{}", self.phase, kind.code_suffix());

        CheckError {
            kind,
            source_info: SourceInfo {
                source: self.source.to_named_source(),
                primary_span: span,
                phase: self.phase.clone(),
            },
            diagnostic_info: DiagnosticInfo {
                help: None,
                error_code,
            },
        }
    }
}

/// Prints a CheckError with full miette diagnostics.
///
/// Use this for user-facing error display in the CLI.
pub fn print_error(error: CheckError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}
