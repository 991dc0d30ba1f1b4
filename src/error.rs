//! Diagnostic types shared across the lint pipeline.

use serde::Serialize;
use thiserror::Error;

use crate::parse::ParseError;

/// One rule violation, positioned by source line.
///
/// `line == 0` means there is no node to point at (a required field that is
/// absent entirely); the report renders those at file level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.line > 0 {
            write!(f, "{}: {}", self.line, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

/// Ordered, append-only collection of diagnostics for one input.
///
/// Created once per input file and threaded by `&mut` through the whole
/// validation walk, so every rule failure lands in one list in discovery
/// order. Never deduplicates.
#[derive(Debug, Default)]
pub struct Diagnostics {
    list: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    pub fn add(&mut self, line: usize, message: impl Into<String>) {
        self.list.push(Diagnostic {
            line,
            message: message.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.list
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.list
    }
}

/// Failure to obtain a document tree at all.
///
/// These bypass the diagnostic collector entirely and map to process exit 2;
/// the message texts are part of the CLI contract.
#[derive(Debug, Error)]
pub enum LintError {
    #[error("cannot read file content: {0}")]
    Read(#[from] std::io::Error),
    #[error("cannot unmarshal file content: {0}")]
    Parse(#[from] ParseError),
}
