//! Defines the command-line arguments and subcommands for the plumbline CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::category::AlignmentCategory;
use crate::config::WrapBeforeName;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "plumbline",
    version,
    about = "A column-precise vertical alignment and wrap-style checker for Java source."
)]
pub struct PlumblineArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check files and report style violations.
    Check {
        /// Files or directories to check; directories are searched
        /// recursively for .java files.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Path to a YAML configuration file.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Restrict alignment checking to these categories.
        #[arg(long = "apply-to", value_name = "CATEGORY")]
        apply_to: Vec<AlignmentCategory>,
        /// Disable the wrap-style facet.
        #[arg(long)]
        no_wrap: bool,
        /// Disable the comment-column facet.
        #[arg(long)]
        no_comments: bool,
        /// Wrap policy for the method name: always, never or optional.
        #[arg(long, value_name = "POLICY")]
        wrap_decl_before_name: Option<WrapBeforeName>,
        /// Flag method declarations written entirely on one line.
        #[arg(long)]
        forbid_one_line_decl: bool,
        /// Emit the report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Dump the token stream of a single file.
    Tokens {
        /// The file to tokenize.
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Dump the extracted constructs of a single file as JSON.
    Constructs {
        /// The file to extract from.
        #[arg(required = true)]
        file: PathBuf,
    },
}
