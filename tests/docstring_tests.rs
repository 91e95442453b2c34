#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use apispec_webframeworks::yaml_utils::{
    load_operations_from_docstring, load_yaml_from_docstring, PATH_KEYS,
};
use common::yaml;
use serde_yaml::Value;

const GREETING_DOC: &str = "A greeting endpoint.

    ---
    x-extension: value
    get:
        description: get a greeting
        responses:
            200:
                description: a pet to be returned
                schema:
                    $ref: '#/definitions/Pet'

    post:
        description: post a greeting
        responses:
            200:
                description: some data

    foo:
        description: not a valid operation
        responses:
            200:
                description:
                    more junk
    ";

#[test]
fn test_operations_keep_methods_and_extensions() {
    let operations = load_operations_from_docstring(GREETING_DOC).unwrap();
    let keys: Vec<&str> = operations.keys().filter_map(Value::as_str).collect();
    assert_eq!(keys, vec!["x-extension", "get", "post"]);
    assert_eq!(
        operations.get("post"),
        Some(&yaml("{description: post a greeting, responses: {200: {description: some data}}}"))
    );
}

#[test]
fn test_full_yaml_keeps_unknown_keys() {
    let data = load_yaml_from_docstring(GREETING_DOC).unwrap();
    assert!(data.contains_key("foo"));
    assert_eq!(
        data.get("foo").and_then(|foo| foo.get("responses")),
        Some(&yaml("{200: {description: more junk}}"))
    );
}

#[test]
fn test_extraction_is_idempotent() {
    let first = load_operations_from_docstring(GREETING_DOC).unwrap();
    let second = load_operations_from_docstring(GREETING_DOC).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_every_path_key_is_an_operation() {
    let doc: String = PATH_KEYS
        .iter()
        .fold(String::from("All methods.\n---\n"), |mut doc, method| {
            doc.push_str(method);
            doc.push_str(": {}\n");
            doc
        });
    let operations = load_operations_from_docstring(&doc).unwrap();
    assert_eq!(operations.len(), PATH_KEYS.len());
}

#[test]
fn test_prose_only_docstring() {
    assert!(load_operations_from_docstring("Just a summary.\n\nMore prose.")
        .unwrap()
        .is_empty());
}
