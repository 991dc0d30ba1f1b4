//! Resource requirement rules: cpu counts and memory quantities.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Diagnostics;
use crate::node::Node;

/// Binary-suffixed memory quantity, e.g. `512Mi`.
static MEMORY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+(Ki|Mi|Gi)$").unwrap());

pub(super) fn validate_resource_requirements(resources: &Node, diags: &mut Diagnostics) {
    if resources.as_mapping().is_none() {
        diags.add(resources.line, "resources must be object");
        return;
    }
    if let Some(limits) = resources.get("limits") {
        validate_resource_map(limits, "limits", diags);
    }
    if let Some(requests) = resources.get("requests") {
        validate_resource_map(requests, "requests", diags);
    }
}

/// Walks the entries as written rather than a fixed field list: duplicated
/// keys are each checked, unknown keys pass through untouched.
fn validate_resource_map(map: &Node, field: &str, diags: &mut Diagnostics) {
    let Some(entries) = map.as_mapping() else {
        diags.add(map.line, format!("{field} must be object"));
        return;
    };

    for (key, value) in entries {
        let Some(key) = key.as_str() else {
            diags.add(value.line, format!("{field} must be object"));
            continue;
        };
        match key {
            "cpu" => {
                if !value.is_int() {
                    diags.add(value.line, "cpu must be int");
                }
            }
            "memory" => match value.as_str() {
                None => diags.add(value.line, "memory must be string"),
                Some(v) if !MEMORY_RE.is_match(v) => {
                    diags.add(value.line, format!("memory has invalid format '{v}'"));
                }
                Some(_) => {}
            },
            _ => {}
        }
    }
}
