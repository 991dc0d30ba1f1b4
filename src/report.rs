//! Report rendering: the user-facing diagnostic lines and the JSON boundary.

use std::io::{self, Write};

use serde::Serialize;

use crate::error::Diagnostic;

/// Output format for the diagnostic report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Diagnostic as serialized for machine consumers.
#[derive(Serialize)]
struct DiagnosticDto<'a> {
    file: &'a str,
    line: usize,
    message: &'a str,
}

pub fn render(
    file: &str,
    diags: &[Diagnostic],
    format: ReportFormat,
    out: &mut impl Write,
) -> io::Result<()> {
    match format {
        ReportFormat::Text => render_text(file, diags, out),
        ReportFormat::Json => render_json(file, diags, out),
    }
}

/// One line per violation: `<file>:<line> <message>`, or `<file>: <message>`
/// when the diagnostic carries no source position.
pub fn render_text(file: &str, diags: &[Diagnostic], out: &mut impl Write) -> io::Result<()> {
    for diag in diags {
        if diag.line > 0 {
            writeln!(out, "{}:{} {}", file, diag.line, diag.message)?;
        } else {
            writeln!(out, "{}: {}", file, diag.message)?;
        }
    }
    Ok(())
}

pub fn render_json(file: &str, diags: &[Diagnostic], out: &mut impl Write) -> io::Result<()> {
    let dtos: Vec<DiagnosticDto<'_>> = diags
        .iter()
        .map(|d| DiagnosticDto {
            file,
            line: d.line,
            message: &d.message,
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &dtos).map_err(io::Error::other)?;
    writeln!(out)
}
