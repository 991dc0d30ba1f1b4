//! podlint entry point: lint a Pod manifest and report every violation.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use podlint::error::{Diagnostics, LintError};
use podlint::report::{self, ReportFormat};
use podlint::{parse, validate};

/// Pod manifest linter.
///
/// Walks every document in FILE against the fixed Pod schema and prints one
/// line per violation. Exits 0 when the manifest is clean, 1 when violations
/// were found, 2 when the file cannot be read or parsed.
#[derive(Parser, Debug)]
#[command(name = "podlint", version, about)]
struct Cli {
    /// Path to the manifest to lint.
    file: PathBuf,

    /// Report format.
    #[arg(long, value_enum, default_value = "text")]
    format: ReportFormat,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("podlint: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let file = basename(&cli.file);

    let diags = match lint_file(&cli.file) {
        Ok(diags) => diags,
        Err(err) => {
            // Read/parse failures bypass the collector: one message, exit 2.
            println!("{file}: {err}");
            return Ok(ExitCode::from(2));
        }
    };

    if diags.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }

    let mut stdout = io::stdout().lock();
    report::render(&file, diags.as_slice(), cli.format, &mut stdout)
        .context("writing report")?;
    Ok(ExitCode::FAILURE)
}

fn lint_file(path: &Path) -> Result<Diagnostics, LintError> {
    let text = std::fs::read_to_string(path)?;
    let docs = parse::parse_str(&text)?;
    tracing::debug!(documents = docs.len(), "parsed manifest stream");
    Ok(validate::validate_documents(&docs))
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
