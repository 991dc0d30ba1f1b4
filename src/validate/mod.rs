//! Validation phase: schema walk over parsed manifest trees.
//!
//! One routine per manifest section, composed top-down. Every routine
//! appends to the shared collector and keeps checking sibling fields after a
//! failure; descent stops only where a subtree's own shape is wrong or a
//! gateway field is absent.

mod container;
mod document;
mod resources;
mod spec;

pub use document::validate_document;

use crate::error::Diagnostics;
use crate::node::Node;

/// Validate every document of a manifest stream against one shared
/// collector, preserving discovery order across documents.
pub fn validate_documents(docs: &[Node]) -> Diagnostics {
    let mut diags = Diagnostics::new();
    for doc in docs {
        document::validate_document(doc, &mut diags);
    }
    diags
}
