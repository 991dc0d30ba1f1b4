#![allow(dead_code)]

use podlint::error::Diagnostic;
use podlint::node::Node;
use podlint::{parse, validate};

/// Parse a YAML stream and validate every document with a fresh collector.
pub fn lint(input: &str) -> Vec<Diagnostic> {
    let docs = parse::parse_str(input).expect("fixture should parse");
    validate::validate_documents(&docs).into_vec()
}

/// Parse a stream expected to hold exactly one document.
pub fn parse_one(input: &str) -> Node {
    let mut docs = parse::parse_str(input).expect("fixture should parse");
    assert_eq!(docs.len(), 1, "expected a single document");
    docs.remove(0)
}

pub fn messages(diags: &[Diagnostic]) -> Vec<&str> {
    diags.iter().map(|d| d.message.as_str()).collect()
}

/// How many diagnostics landed at exactly this line with this message.
pub fn count_of(diags: &[Diagnostic], line: usize, message: &str) -> usize {
    diags
        .iter()
        .filter(|d| d.line == line && d.message == message)
        .count()
}
