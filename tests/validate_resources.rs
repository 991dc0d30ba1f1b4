//! Resource requirement rules at the manifest level.

mod helpers;

use helpers::{count_of, lint};

fn pod_with_resources(resources_body: &str) -> String {
    let mut doc = String::from(
        "apiVersion: v1\nkind: Pod\nmetadata:\n  name: app\nspec:\n  containers:\n    - name: app\n      image: registry.bigbrother.io/team/app:v1\n      resources:\n",
    );
    doc.push_str(resources_body);
    doc
}

#[test]
fn quantity_errors_split_type_from_format() {
    let diags = lint(include_str!("fixtures/bad_resources.yaml"));
    assert_eq!(count_of(&diags, 11, "cpu must be int"), 1);
    assert_eq!(count_of(&diags, 12, "memory must be string"), 1);
    assert_eq!(count_of(&diags, 15, "memory has invalid format '512'"), 1);
    assert_eq!(diags.len(), 3, "unknown keys pass through: {diags:?}");
}

#[test]
fn empty_resources_object_is_valid() {
    let diags = lint(&pod_with_resources("        {}\n"));
    assert!(diags.is_empty(), "got: {diags:?}");
}

#[test]
fn scalar_limits_is_a_shape_error() {
    let diags = lint(&pod_with_resources("        limits: nope\n"));
    assert_eq!(count_of(&diags, 10, "limits must be object"), 1);
    assert_eq!(diags.len(), 1);
}

#[test]
fn requests_are_checked_like_limits() {
    let diags = lint(&pod_with_resources(
        "        requests:\n          memory: 512Ti\n",
    ));
    assert_eq!(count_of(&diags, 11, "memory has invalid format '512Ti'"), 1);
    assert_eq!(diags.len(), 1);
}

#[test]
fn binary_suffixed_quantities_pass() {
    for quantity in ["1Ki", "512Mi", "4Gi"] {
        let diags = lint(&pod_with_resources(&format!(
            "        limits:\n          memory: {quantity}\n"
        )));
        assert!(diags.is_empty(), "memory {quantity} should pass: {diags:?}");
    }
}
