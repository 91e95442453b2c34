//! # Docstring YAML helpers
//!
//! Handlers document themselves with a YAML block embedded in their docstring.
//! Everything before the first line starting with `---` is free text; the rest
//! is parsed as YAML:
//!
//! ```text
//! Gist detail view.
//! ---
//! x-extension: metadata
//! get:
//!     responses:
//!         200:
//!             schema:
//!                 $ref: '#/definitions/Gist'
//! ```
//!
//! [`load_yaml_from_docstring`] returns the whole top-level mapping, while
//! [`load_operations_from_docstring`] keeps only HTTP method keys and `x-`
//! extension keys. A docstring without a `---` section yields an empty mapping.

use crate::error::SpecError;
use serde_yaml::{Mapping, Value};

/// HTTP methods recognised as operation keys, in the order plugins iterate them.
pub const PATH_KEYS: [&str; 7] = ["get", "post", "put", "patch", "delete", "head", "options"];

const TAB_SIZE: usize = 8;

/// Whether `key` names an HTTP operation.
#[must_use]
pub fn is_path_key(key: &str) -> bool {
    PATH_KEYS.contains(&key)
}

/// Whether `key` is kept by [`load_operations_from_docstring`].
#[must_use]
pub fn is_operation_key(key: &str) -> bool {
    is_path_key(key) || key.starts_with("x-")
}

/// Normalise docstring indentation the way PEP 257 describes.
///
/// Tabs are expanded, the first line is stripped, the common indentation of
/// the remaining lines is removed and leading/trailing blank lines are dropped.
#[must_use]
pub fn trim_docstring(docstring: &str) -> String {
    if docstring.is_empty() {
        return String::new();
    }

    let lines: Vec<String> = docstring.lines().map(expand_tabs).collect();

    let indent = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let stripped = line.trim_start();
            if stripped.is_empty() {
                None
            } else {
                Some(line.chars().count() - stripped.chars().count())
            }
        })
        .min();

    let mut trimmed: Vec<String> = Vec::with_capacity(lines.len());
    if let Some(first) = lines.first() {
        trimmed.push(first.trim().to_string());
    }
    if let Some(indent) = indent {
        for line in lines.iter().skip(1) {
            let rest: String = line.chars().skip(indent).collect();
            trimmed.push(rest.trim_end().to_string());
        }
    }

    while trimmed.last().is_some_and(|line| line.is_empty()) {
        trimmed.pop();
    }
    let leading = trimmed.iter().take_while(|line| line.is_empty()).count();
    trimmed.drain(..leading);

    trimmed.join("\n")
}

/// Load the YAML block of a docstring as an unfiltered top-level mapping.
///
/// # Errors
///
/// [`SpecError::Yaml`] for malformed YAML and [`SpecError::DocstringNotMapping`]
/// when the block is a scalar or a sequence.
pub fn load_yaml_from_docstring(docstring: &str) -> Result<Mapping, SpecError> {
    let trimmed = trim_docstring(docstring);
    let lines: Vec<&str> = trimmed.split('\n').collect();

    let Some(cut_from) = lines
        .iter()
        .position(|line| line.trim().starts_with("---"))
    else {
        return Ok(Mapping::new());
    };

    let yaml = dedent(&lines[cut_from..].join("\n"));
    match serde_yaml::from_str::<Value>(&yaml)? {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(SpecError::DocstringNotMapping {
            summary: lines.first().copied().unwrap_or_default().to_string(),
        }),
    }
}

/// Load the operations declared in a docstring.
///
/// Keeps HTTP method keys ([`PATH_KEYS`]) and `x-` extension keys; any other
/// top-level key is dropped.
///
/// # Errors
///
/// Same as [`load_yaml_from_docstring`].
pub fn load_operations_from_docstring(docstring: &str) -> Result<Mapping, SpecError> {
    let doc_data = load_yaml_from_docstring(docstring)?;
    Ok(doc_data
        .into_iter()
        .filter(|(key, _)| key.as_str().is_some_and(is_operation_key))
        .collect())
}

fn expand_tabs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let width = TAB_SIZE - column % TAB_SIZE;
            out.extend(std::iter::repeat(' ').take(width));
            column += width;
        } else {
            out.push(ch);
            column += 1;
        }
    }
    out
}

/// Remove the whitespace prefix common to every non-blank line.
fn dedent(text: &str) -> String {
    let margin = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start_matches(' ').len())
        .min()
        .unwrap_or(0);

    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                &line[margin..]
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    const GIST_DOC: &str = "Gist detail view.
        ---
        x-extension: metadata
        get:
            responses:
                200:
                    schema:
                        $ref: '#/definitions/Gist'
        ";

    #[test]
    fn test_trim_docstring_removes_common_indent() {
        let trimmed = trim_docstring("  Summary.\n\n      body\n        nested\n    ");
        assert_eq!(trimmed, "Summary.\n\nbody\n  nested");
    }

    #[test]
    fn test_trim_docstring_expands_tabs() {
        assert_eq!(trim_docstring("Summary.\n\tbody\n\t  more"), "Summary.\nbody\n  more");
    }

    #[test]
    fn test_trim_docstring_drops_leading_blank_lines() {
        assert_eq!(trim_docstring("\n\n    Body.\n    ---\n"), "Body.\n---");
        assert_eq!(trim_docstring(""), "");
    }

    #[test]
    fn test_load_yaml_without_marker_is_empty() {
        let yaml = load_yaml_from_docstring("Just prose.\n    No YAML here.").unwrap();
        assert!(yaml.is_empty());
        assert!(load_yaml_from_docstring("").unwrap().is_empty());
    }

    #[test]
    fn test_load_yaml_keeps_every_top_level_key() {
        let yaml = load_yaml_from_docstring(GIST_DOC).unwrap();
        assert_eq!(yaml.len(), 2);
        assert_eq!(yaml.get("x-extension").and_then(Value::as_str), Some("metadata"));
        let expected: Value =
            serde_yaml::from_str("responses: {200: {schema: {$ref: '#/definitions/Gist'}}}")
                .unwrap();
        assert_eq!(yaml.get("get"), Some(&expected));
    }

    #[test]
    fn test_load_operations_drops_unknown_keys() {
        let doc = "Endpoint.
            ---
            x-extension: value
            get:
                description: get a greeting
            foo:
                description: not a valid operation
            ";
        let ops = load_operations_from_docstring(doc).unwrap();
        let keys: Vec<&str> = ops.keys().filter_map(Value::as_str).collect();
        assert_eq!(keys, vec!["x-extension", "get"]);
    }

    #[test]
    fn test_marker_only_yields_empty_mapping() {
        assert!(load_yaml_from_docstring("Nothing.\n---\n").unwrap().is_empty());
    }

    #[test]
    fn test_scalar_block_is_rejected() {
        let err = load_yaml_from_docstring("Scalar.\n---\njust text\n").unwrap_err();
        assert!(matches!(err, SpecError::DocstringNotMapping { .. }));
    }

    #[test]
    fn test_malformed_yaml_is_reported() {
        let err = load_yaml_from_docstring("Broken.\n---\nget: [unclosed\n").unwrap_err();
        assert!(matches!(err, SpecError::Yaml(_)));
    }

    #[test]
    fn test_path_keys() {
        assert!(is_path_key("get"));
        assert!(!is_path_key("GET"));
        assert!(is_operation_key("x-anything"));
        assert!(!is_operation_key("foo"));
    }
}
