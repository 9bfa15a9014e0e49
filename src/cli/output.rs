//! Handles all user-facing output for the CLI.
//!
//! This module is responsible for pretty-printing, colorizing output,
//! formatting reports, and generating JSON. By centralizing output logic
//! here, we ensure a consistent user experience across all commands.

use std::io::Write;
use std::path::PathBuf;

use atty::Stream;
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::token::Token;
use crate::violation::Violation;

/// One checked file and its findings.
pub type FileReport = (PathBuf, Vec<Violation>);

fn color_choice() -> ColorChoice {
    if atty::is(Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Prints a human-readable report, one header per file with violations.
pub fn print_reports(reports: &[FileReport]) {
    let mut stdout = StandardStream::stdout(color_choice());
    for (file, violations) in reports {
        if violations.is_empty() {
            continue;
        }
        let _ = stdout.set_color(ColorSpec::new().set_bold(true));
        let _ = writeln!(stdout, "{}", file.display());
        let _ = stdout.reset();
        for violation in violations {
            let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)));
            let _ = write!(stdout, "{}x{}", violation.line, violation.col);
            let _ = stdout.reset();
            let _ = writeln!(stdout, ": {}", violation.message);
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    file: String,
    violations: &'a [Violation],
}

/// Prints the whole report as a JSON array of per-file objects.
pub fn print_json(reports: &[FileReport]) -> Result<(), serde_json::Error> {
    let out: Vec<JsonReport> = reports
        .iter()
        .map(|(file, violations)| JsonReport {
            file: file.display().to_string(),
            violations,
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

/// Prints a token stream, one token per line.
pub fn print_tokens(tokens: &[Token]) {
    for tok in tokens {
        println!("{}\t{:?}\t{}", tok.pos, tok.kind, tok.lexeme.escape_debug());
    }
}
