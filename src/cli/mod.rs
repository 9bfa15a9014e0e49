//! The plumbline command-line interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::Parser;
use walkdir::WalkDir;

use crate::category::CategorySet;
use crate::cli::args::{Command, PlumblineArgs};
use crate::cli::output::FileReport;
use crate::config::CheckConfig;
use crate::engine::check_named_source;
use crate::errors::{print_error, CheckError, SourceContext};
use crate::extract::extract;
use crate::lexer::tokenize;

pub mod args;
pub mod output;

/// The main entry point for the CLI. Exits 1 when violations were found or
/// any file failed to check.
pub fn run() {
    let args = PlumblineArgs::parse();

    let result = match args.command {
        Command::Check {
            paths,
            config,
            apply_to,
            no_wrap,
            no_comments,
            wrap_decl_before_name,
            forbid_one_line_decl,
            json,
        } => {
            let mut check_config = match load_config(config.as_deref()) {
                Ok(c) => c,
                Err(e) => {
                    report_error(e);
                    process::exit(1);
                }
            };
            if !apply_to.is_empty() {
                check_config.categories = CategorySet::of(&apply_to);
            }
            if no_wrap {
                check_config.wrap_method = false;
            }
            if no_comments {
                check_config.comment_alignment = false;
            }
            if let Some(policy) = wrap_decl_before_name {
                check_config.wrap.wrap_decl_before_name = policy;
            }
            if forbid_one_line_decl {
                check_config.wrap.allow_one_line_decl = false;
            }
            handle_check(&paths, &check_config, json)
        }
        Command::Tokens { file } => handle_tokens(&file),
        Command::Constructs { file } => handle_constructs(&file),
    };

    match result {
        Ok(violation_count) => {
            if violation_count > 0 {
                process::exit(1);
            }
        }
        Err(e) => {
            report_error(e);
            process::exit(1);
        }
    }
}

fn report_error(error: Box<dyn std::error::Error>) {
    match error.downcast::<CheckError>() {
        Ok(check_error) => print_error(*check_error),
        Err(other) => eprintln!("Error: {}", other),
    }
}

fn load_config(path: Option<&Path>) -> Result<CheckConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let yaml = fs::read_to_string(path)?;
            Ok(CheckConfig::from_yaml(&yaml)?)
        }
        None => Ok(CheckConfig::default()),
    }
}

/// Handles the `check` subcommand; returns the total violation count.
fn handle_check(
    paths: &[PathBuf],
    config: &CheckConfig,
    json: bool,
) -> Result<usize, Box<dyn std::error::Error>> {
    let files = collect_files(paths)?;
    let mut reports: Vec<FileReport> = Vec::new();
    let mut total = 0usize;
    for file in files {
        let source = fs::read_to_string(&file)?;
        let violations = check_named_source(&file.display().to_string(), &source, config)?;
        total += violations.len();
        reports.push((file, violations));
    }
    if json {
        output::print_json(&reports)?;
    } else {
        output::print_reports(&reports);
    }
    Ok(total)
}

/// Expands directories into their .java files, recursively and sorted.
fn collect_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path) {
                let entry = entry?;
                let is_java = entry.path().extension().is_some_and(|ext| ext == "java");
                if entry.file_type().is_file() && is_java {
                    files.push(entry.into_path());
                }
            }
        } else {
            files.push(path.clone());
        }
    }
    files.sort();
    Ok(files)
}

/// Handles the `tokens` subcommand.
fn handle_tokens(path: &Path) -> Result<usize, Box<dyn std::error::Error>> {
    let source = fs::read_to_string(path)?;
    let context = SourceContext::from_file(path.display().to_string(), source.as_str());
    let tokens = tokenize(&source, &context)?;
    output::print_tokens(&tokens);
    Ok(0)
}

/// Handles the `constructs` subcommand.
fn handle_constructs(path: &Path) -> Result<usize, Box<dyn std::error::Error>> {
    let source = fs::read_to_string(path)?;
    let context = SourceContext::from_file(path.display().to_string(), source.as_str());
    let tokens = tokenize(&source, &context)?;
    let constructs = extract(&tokens, &context)?;
    println!("{}", serde_json::to_string_pretty(&constructs)?);
    Ok(0)
}
