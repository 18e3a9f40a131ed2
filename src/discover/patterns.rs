//! Suffix conventions
//!
//! These suffixes are shared with the rest of the runtime and are the only
//! externally visible contract of this component; they must not change.

/// Suffix of an executable module file.
pub const MODULE_SUFFIX: &str = "js";

/// Suffix of a segment configuration file.
pub const SEGMENT_SUFFIX: &str = "segment.json";

/// Suffix of a node-local segment file.
pub const NODE_SEGMENT_SUFFIX: &str = "segment.local.js";

/// Suffix of a repository segment file.
pub const REPOSITORY_SEGMENT_SUFFIX: &str = "segment.repository.js";

/// Markers flagging a machine-generated variant of a hand-authored file.
/// A filename whose second-to-last extension is one of these is excluded
/// from asset listings.
pub const VARIANT_MARKERS: [&str; 3] = ["local", "repository", "remote"];

/// Glob matching every module file under the root.
pub const MODULE_FILES: &str = "**/*.js";

/// Glob matching every segment file under the root.
pub const SEGMENT_FILES: &str = "**/*.segment.json";

/// Glob matching every node-local segment file under the root.
pub const NODE_SEGMENT_FILES: &str = "**/*.segment.local.js";

/// Glob matching every repository segment file under the root.
pub const REPOSITORY_SEGMENT_FILES: &str = "**/*.segment.repository.js";
