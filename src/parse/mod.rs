//! Parse phase: YAML text → generic node trees.
//!
//! The validators never see YAML; they consume [`crate::node::Node`] trees
//! built here from the marked event stream of `yaml-rust2`.

mod loader;

use thiserror::Error;

use crate::node::Node;

/// Scanner or parser failure in the underlying YAML library. Unlike
/// validation diagnostics, this aborts the whole run.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ParseError(#[from] yaml_rust2::scanner::ScanError);

/// Parse a (possibly multi-document) YAML stream into one `Node` per
/// document. An empty stream yields an empty list.
pub fn parse_str(input: &str) -> Result<Vec<Node>, ParseError> {
    loader::load(input)
}
