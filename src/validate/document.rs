//! Document root and metadata rules.

use crate::error::Diagnostics;
use crate::node::Node;

use super::spec::validate_pod_spec;

/// Validate one top-level document node.
///
/// Each field check is independent: a wrong `apiVersion` never stops `kind`
/// or `spec` from being checked. Required-but-absent fields report at line 0
/// since there is no node to point at.
pub fn validate_document(doc: &Node, diags: &mut Diagnostics) {
    if doc.as_mapping().is_none() {
        diags.add(doc.line, "root must be object");
        return;
    }

    match doc.get("apiVersion") {
        None => diags.add(0, "apiVersion is required"),
        Some(api) => match api.as_str() {
            None => diags.add(api.line, "apiVersion must be string"),
            Some(v) if v != "v1" => {
                diags.add(api.line, format!("apiVersion has unsupported value '{v}'"));
            }
            Some(_) => {}
        },
    }

    match doc.get("kind") {
        None => diags.add(0, "kind is required"),
        Some(kind) => match kind.as_str() {
            None => diags.add(kind.line, "kind must be string"),
            Some(v) if v != "Pod" => {
                diags.add(kind.line, format!("kind has unsupported value '{v}'"));
            }
            Some(_) => {}
        },
    }

    match doc.get("metadata") {
        None => diags.add(0, "metadata is required"),
        Some(meta) => validate_metadata(meta, diags),
    }

    match doc.get("spec") {
        None => diags.add(0, "spec is required"),
        Some(spec) => validate_pod_spec(spec, diags),
    }
}

fn validate_metadata(meta: &Node, diags: &mut Diagnostics) {
    if meta.as_mapping().is_none() {
        diags.add(meta.line, "metadata must be object");
        return;
    }

    match meta.get("name") {
        None => diags.add(0, "name is required"),
        Some(name) => match name.as_str() {
            None => diags.add(name.line, "name must be string"),
            // Whitespace-only names count as absent, not malformed.
            Some(v) if v.trim().is_empty() => diags.add(name.line, "name is required"),
            Some(_) => {}
        },
    }

    if let Some(ns) = meta.get("namespace") {
        if ns.as_str().is_none() {
            diags.add(ns.line, "namespace must be string");
        }
    }

    if let Some(labels) = meta.get("labels") {
        match labels.as_mapping() {
            None => diags.add(labels.line, "labels must be object"),
            Some(entries) => {
                // One blunt signal for the first malformed entry; individual
                // label entries are not diagnosed further.
                for (key, value) in entries {
                    if key.as_str().is_none() || value.as_str().is_none() {
                        diags.add(value.line, "labels must be object");
                        break;
                    }
                }
            }
        }
    }
}
