//! Plumbline checks Java source for vertical alignment and wrap style.
//!
//! The library exposes a single-file check engine: feed it source text (or a
//! pre-built token stream) and a [`CheckConfig`], and it returns every style
//! [`Violation`] found, sorted by position. Three facets run under one roof:
//! vertical alignment of declaration groups, method declaration and argument
//! list wrapping, and trailing comment columns.
//!
//! ```no_run
//! use plumbline::{check_source, CheckConfig};
//!
//! let source = std::fs::read_to_string("Main.java").unwrap();
//! for violation in check_source(&source, &CheckConfig::default()).unwrap() {
//!     println!("{violation}");
//! }
//! ```

pub mod align;
pub mod category;
pub mod cli;
pub mod comment;
pub mod config;
pub mod construct;
pub mod engine;
pub mod errors;
pub mod extract;
pub mod lexer;
pub mod token;
pub mod violation;
pub mod wrap;

pub use category::{AlignmentCategory, CategorySet};
pub use config::{CheckConfig, WrapBeforeName, WrapPolicy};
pub use construct::Construct;
pub use engine::{check_named_source, check_source, check_tokens};
pub use errors::{CheckError, ErrorKind, SourceContext};
pub use token::{Pos, Token, TokenKind};
pub use violation::Violation;
