//! Filename classification
//!
//! Pure suffix predicates over filename strings. No filesystem access; each
//! check is O(1) string work on the final path component.

use std::path::Path;

use crate::discover::patterns::{
    MODULE_SUFFIX, NODE_SEGMENT_SUFFIX, REPOSITORY_SEGMENT_SUFFIX, SEGMENT_SUFFIX,
    VARIANT_MARKERS,
};

/// Whether `filename` is a machine-generated variant of a hand-authored
/// file, identified by a `local`, `repository`, or `remote` marker in the
/// second-to-last extension position (`logo.local.png`, `x.remote.js`).
pub fn is_generated_variant(filename: &str) -> bool {
    let name = file_name(filename);
    let parts: Vec<&str> = name.split('.').collect();
    if parts.len() < 3 {
        return false;
    }
    VARIANT_MARKERS.contains(&parts[parts.len() - 2])
}

/// Whether `filename` is an executable module file.
pub fn is_module_file(filename: &str) -> bool {
    has_suffix(filename, MODULE_SUFFIX)
}

/// Whether `filename` is a segment configuration file.
pub fn is_segment_file(filename: &str) -> bool {
    has_suffix(filename, SEGMENT_SUFFIX)
}

/// Whether `filename` is a node-local segment file.
pub fn is_node_segment_file(filename: &str) -> bool {
    has_suffix(filename, NODE_SEGMENT_SUFFIX)
}

/// Whether `filename` is a repository segment file.
pub fn is_repository_segment_file(filename: &str) -> bool {
    has_suffix(filename, REPOSITORY_SEGMENT_SUFFIX)
}

fn has_suffix(filename: &str, suffix: &str) -> bool {
    file_name(filename)
        .strip_suffix(suffix)
        .is_some_and(|rest| rest.ends_with('.'))
}

fn file_name(filename: &str) -> &str {
    Path::new(filename)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(filename)
}
