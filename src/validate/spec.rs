//! Pod spec rules: OS selection and the container list.

use std::collections::HashSet;

use crate::error::Diagnostics;
use crate::node::{Node, NodeValue};

use super::container::validate_container;

pub(super) fn validate_pod_spec(spec: &Node, diags: &mut Diagnostics) {
    if spec.as_mapping().is_none() {
        diags.add(spec.line, "spec must be object");
        return;
    }

    if let Some(os) = spec.get("os") {
        validate_pod_os(os, diags);
    }

    match spec.get("containers") {
        None => diags.add(0, "containers is required"),
        Some(containers) => match containers.as_sequence() {
            None => diags.add(containers.line, "containers must be array"),
            Some([]) => diags.add(containers.line, "containers must be non-empty array"),
            Some(items) => {
                let mut seen = HashSet::new();
                for item in items {
                    let name = validate_container(item, diags);
                    if name.is_empty() {
                        continue;
                    }
                    if seen.contains(&name) {
                        // Duplicate names reuse the format-error message.
                        diags.add(item.line, format!("name has invalid format '{name}'"));
                    }
                    seen.insert(name);
                }
            }
        },
    }
}

/// `os` takes two shapes: a bare scalar (`os: linux`) or an object with a
/// `name` child (`os: {name: linux}`). Both funnel into the same
/// case-insensitive enum check.
fn validate_pod_os(os: &Node, diags: &mut Diagnostics) {
    match &os.value {
        NodeValue::Scalar { .. } => match os.as_str() {
            None => diags.add(os.line, "os must be string"),
            Some(v) => check_os_value(v, os.line, diags),
        },
        NodeValue::Mapping(_) => match os.get("name") {
            None => diags.add(0, "os.name is required"),
            Some(name) => match name.as_str() {
                None => diags.add(name.line, "name must be string"),
                Some(v) => check_os_value(v, name.line, diags),
            },
        },
        NodeValue::Sequence(_) => diags.add(os.line, "os must be string"),
    }
}

fn check_os_value(value: &str, line: usize, diags: &mut Diagnostics) {
    if !value.eq_ignore_ascii_case("linux") && !value.eq_ignore_ascii_case("windows") {
        // The message carries the value as written, not lowercased.
        diags.add(line, format!("os has unsupported value '{value}'"));
    }
}
