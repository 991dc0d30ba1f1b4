//! Container rules: name format, image reference, ports, probes, resources.

mod helpers;

use helpers::{count_of, lint, messages};

fn pod_with_container(container_body: &str) -> String {
    let mut doc = String::from(
        "apiVersion: v1\nkind: Pod\nmetadata:\n  name: app\nspec:\n  containers:\n",
    );
    doc.push_str(container_body);
    doc
}

fn pod_with_name(name: &str) -> String {
    pod_with_container(&format!(
        "    - name: {name}\n      image: registry.bigbrother.io/team/app:v1\n      resources: {{}}\n"
    ))
}

#[test]
fn well_formed_names_pass() {
    for name in ["web", "web_server_1", "a", "\"0\"", "x86_64"] {
        let diags = lint(&pod_with_name(name));
        assert!(diags.is_empty(), "name {name} should pass, got: {diags:?}");
    }
}

#[test]
fn malformed_names_report_with_the_value_embedded() {
    for (name, written) in [
        ("Web", "Web"),
        ("web-server", "web-server"),
        ("_web", "_web"),
        ("web_", "web_"),
        ("a__b", "a__b"),
        ("\"has space\"", "has space"),
    ] {
        let diags = lint(&pod_with_name(name));
        assert_eq!(
            count_of(&diags, 7, &format!("name has invalid format '{written}'")),
            1,
            "name {name}: {diags:?}"
        );
        assert_eq!(diags.len(), 1);
    }
}

#[test]
fn empty_or_blank_name_counts_as_missing() {
    for name in ["\"\"", "\"   \""] {
        let diags = lint(&pod_with_name(name));
        assert_eq!(count_of(&diags, 7, "name is required"), 1, "{diags:?}");
        assert_eq!(diags.len(), 1);
    }
}

#[test]
fn integer_name_is_a_type_error() {
    let diags = lint(&pod_with_name("123"));
    assert_eq!(count_of(&diags, 7, "name must be string"), 1);
    assert_eq!(diags.len(), 1);
}

#[test]
fn missing_name_does_not_stop_the_other_checks() {
    let diags = lint(&pod_with_container(
        "    - image: not-pinned\n      resources: nope\n",
    ));
    assert_eq!(count_of(&diags, 0, "name is required"), 1);
    assert_eq!(count_of(&diags, 7, "image has invalid format 'not-pinned'"), 1);
    assert_eq!(count_of(&diags, 8, "resources must be object"), 1);
    assert_eq!(diags.len(), 3);
}

#[test]
fn scalar_container_entry_is_a_shape_error() {
    let diags = lint(&pod_with_container("    - nope\n"));
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].line, 7);
    assert_eq!(diags[0].message, "container must be object");
}

#[test]
fn image_must_be_registry_pinned() {
    for image in [
        "nginx:latest",
        "registry.bigbrother.io/app",
        "registry.bigbrother.io/:v1",
        "other.registry.io/app:v1",
    ] {
        let diags = lint(&pod_with_container(&format!(
            "    - name: app\n      image: {image}\n      resources: {{}}\n"
        )));
        assert_eq!(
            count_of(&diags, 8, &format!("image has invalid format '{image}'")),
            1,
            "image {image}: {diags:?}"
        );
    }
}

#[test]
fn tag_characters_beyond_alphanumerics_are_accepted() {
    let diags = lint(&pod_with_container(
        "    - name: app\n      image: registry.bigbrother.io/team/app:1.0_beta-2\n      resources: {}\n",
    ));
    assert!(diags.is_empty(), "got: {diags:?}");
}

#[test]
fn port_boundaries_are_inclusive_and_type_checked() {
    let diags = lint(include_str!("fixtures/bad_ports.yaml"));
    assert_eq!(count_of(&diags, 10, "containerPort value out of range"), 1);
    assert_eq!(count_of(&diags, 11, "containerPort value out of range"), 1);
    assert_eq!(count_of(&diags, 12, "containerPort must be int"), 1);
    assert_eq!(count_of(&diags, 14, "protocol has unsupported value 'tcp'"), 1);
    // 1 and 65535 are in range; UDP is a supported protocol.
    assert_eq!(diags.len(), 4, "got: {diags:?}");
}

#[test]
fn scalar_ports_is_a_shape_error() {
    let diags = lint(&pod_with_container(
        "    - name: app\n      image: registry.bigbrother.io/team/app:v1\n      ports: nope\n      resources: {}\n",
    ));
    assert_eq!(count_of(&diags, 9, "ports must be array"), 1);
    assert_eq!(diags.len(), 1);
}

#[test]
fn missing_container_port_reports_at_line_zero() {
    let diags = lint(&pod_with_container(
        "    - name: app\n      image: registry.bigbrother.io/team/app:v1\n      ports:\n        - protocol: TCP\n      resources: {}\n",
    ));
    assert_eq!(count_of(&diags, 0, "containerPort is required"), 1);
    assert_eq!(diags.len(), 1);
}

#[test]
fn probe_without_http_get_stops_descent() {
    let diags = lint(include_str!("fixtures/bad_probes.yaml"));
    assert_eq!(
        messages(&diags),
        vec![
            "httpGet is required",
            "path has invalid format 'healthz'",
            "port must be int",
        ]
    );
    assert_eq!(diags[0].line, 0);
    assert_eq!(diags[1].line, 12);
    assert_eq!(diags[2].line, 13);
}

#[test]
fn scalar_probe_names_the_offending_field() {
    let diags = lint(&pod_with_container(
        "    - name: app\n      image: registry.bigbrother.io/team/app:v1\n      livenessProbe: nope\n      resources: {}\n",
    ));
    assert_eq!(count_of(&diags, 9, "livenessProbe must be object"), 1);
    assert_eq!(diags.len(), 1);
}

#[test]
fn http_get_requires_path_and_port() {
    let diags = lint(&pod_with_container(
        "    - name: app\n      image: registry.bigbrother.io/team/app:v1\n      readinessProbe:\n        httpGet: {}\n      resources: {}\n",
    ));
    assert_eq!(count_of(&diags, 0, "path is required"), 1);
    assert_eq!(count_of(&diags, 0, "port is required"), 1);
    assert_eq!(diags.len(), 2);
}

#[test]
fn missing_resources_reports_at_line_zero() {
    let diags = lint(&pod_with_container(
        "    - name: app\n      image: registry.bigbrother.io/team/app:v1\n",
    ));
    assert_eq!(count_of(&diags, 0, "resources is required"), 1);
    assert_eq!(diags.len(), 1);
}
