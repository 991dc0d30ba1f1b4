//! Container rules: identity, image reference, ports, probes.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Diagnostics;
use crate::node::Node;

use super::resources::validate_resource_requirements;

/// Lowercase alphanumeric runs joined by single underscores.
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:_[a-z0-9]+)*$").unwrap());

/// Registry-pinned image reference: host, repository path, `:`, tag.
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^registry\.bigbrother\.io/[^:]+:[A-Za-z0-9._-]+$").unwrap());

/// Validate one `containers` element.
///
/// Returns the container's name for duplicate tracking by the caller: the
/// raw scalar text whenever the `name` key holds a scalar (format-invalid
/// names included), or the empty string when the name cannot be resolved.
/// All field checks run independently; a broken `name` never stops `image`,
/// `ports`, or `resources` from being checked.
pub(super) fn validate_container(container: &Node, diags: &mut Diagnostics) -> String {
    if container.as_mapping().is_none() {
        diags.add(container.line, "container must be object");
        return String::new();
    }

    let mut resolved = String::new();
    match container.get("name") {
        None => diags.add(0, "name is required"),
        Some(name) => {
            match name.as_str() {
                None => diags.add(name.line, "name must be string"),
                Some(v) if v.trim().is_empty() => diags.add(name.line, "name is required"),
                Some(v) if !NAME_RE.is_match(v) => {
                    diags.add(name.line, format!("name has invalid format '{v}'"));
                }
                Some(_) => {}
            }
            if let Some(v) = name.scalar_value() {
                resolved = v.to_string();
            }
        }
    }

    match container.get("image") {
        None => diags.add(0, "image is required"),
        Some(image) => match image.as_str() {
            None => diags.add(image.line, "image must be string"),
            Some(v) if !IMAGE_RE.is_match(v) => {
                diags.add(image.line, format!("image has invalid format '{v}'"));
            }
            Some(_) => {}
        },
    }

    if let Some(ports) = container.get("ports") {
        match ports.as_sequence() {
            None => diags.add(ports.line, "ports must be array"),
            Some(items) => {
                for port in items {
                    validate_container_port(port, diags);
                }
            }
        }
    }

    if let Some(probe) = container.get("readinessProbe") {
        validate_probe(probe, "readinessProbe", diags);
    }
    if let Some(probe) = container.get("livenessProbe") {
        validate_probe(probe, "livenessProbe", diags);
    }

    match container.get("resources") {
        None => diags.add(0, "resources is required"),
        Some(resources) => validate_resource_requirements(resources, diags),
    }

    resolved
}

fn validate_container_port(port: &Node, diags: &mut Diagnostics) {
    if port.as_mapping().is_none() {
        diags.add(port.line, "ports item must be object");
        return;
    }

    match port.get("containerPort") {
        None => diags.add(0, "containerPort is required"),
        Some(value) => check_port_value(value, "containerPort", diags),
    }

    if let Some(protocol) = port.get("protocol") {
        match protocol.as_str() {
            None => diags.add(protocol.line, "protocol must be string"),
            Some(v) if v != "TCP" && v != "UDP" => {
                diags.add(protocol.line, format!("protocol has unsupported value '{v}'"));
            }
            Some(_) => {}
        }
    }
}

/// Shared by `containerPort` and the httpGet `port`: the node must be an
/// integer-tagged scalar, and its value must parse into [1, 65535]. Wrong
/// tag and out-of-range are distinct diagnostics.
fn check_port_value(value: &Node, field: &str, diags: &mut Diagnostics) {
    if !value.is_int() {
        diags.add(value.line, format!("{field} must be int"));
        return;
    }
    let in_range = value
        .scalar_value()
        .and_then(|v| v.parse::<i64>().ok())
        .is_some_and(|v| (1..=65535).contains(&v));
    if !in_range {
        diags.add(value.line, format!("{field} value out of range"));
    }
}

/// `httpGet` is a gateway field: without it no other probe shape is
/// supported, so its absence stops descent into the probe.
fn validate_probe(probe: &Node, field: &str, diags: &mut Diagnostics) {
    if probe.as_mapping().is_none() {
        diags.add(probe.line, format!("{field} must be object"));
        return;
    }
    match probe.get("httpGet") {
        None => diags.add(0, "httpGet is required"),
        Some(http_get) => validate_http_get(http_get, diags),
    }
}

fn validate_http_get(http_get: &Node, diags: &mut Diagnostics) {
    if http_get.as_mapping().is_none() {
        diags.add(http_get.line, "httpGet must be object");
        return;
    }

    match http_get.get("path") {
        None => diags.add(0, "path is required"),
        Some(path) => match path.as_str() {
            None => diags.add(path.line, "path must be string"),
            Some(v) if !v.starts_with('/') => {
                diags.add(path.line, format!("path has invalid format '{v}'"));
            }
            Some(_) => {}
        },
    }

    match http_get.get("port") {
        None => diags.add(0, "port is required"),
        Some(port) => check_port_value(port, "port", diags),
    }
}
