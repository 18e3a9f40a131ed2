//! Location resolution
//!
//! Converts logical filenames to absolute physical locations under a
//! fixed root, and physical locations back to root-relative filenames.

use std::path::{Path, PathBuf};

use crate::error::LocationError;
use crate::location::normalize::{normalize_path, relative_to};

/// Resolves logical filenames against a fixed root location.
///
/// The root is fixed at construction and never changes. Resolution is
/// lexical: a resolved location does not have to exist.
#[derive(Debug, Clone)]
pub struct LocationResolver {
    root: PathBuf,
}

impl LocationResolver {
    /// Creates a resolver rooted at `root`, canonicalizing it first.
    ///
    /// Fails when the root does not exist or cannot be canonicalized.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, LocationError> {
        let root = root
            .as_ref()
            .canonicalize()
            .map_err(LocationError::RootUnavailable)?;
        Ok(Self { root })
    }

    /// Creates a resolver over an already absolute, normalized root.
    ///
    /// Skips canonicalization, so the root does not have to exist on disk.
    /// Used by implementations whose root is virtual.
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        Self {
            root: normalize_path(root.as_ref()),
        }
    }

    /// The canonical absolute root all relative filenames resolve against.
    pub fn root_location(&self) -> &Path {
        &self.root
    }

    /// Maps a logical filename to an absolute physical location.
    ///
    /// A filename with a leading separator is treated as already rooted and
    /// normalized as-is, so identifiers resolved once pass through unchanged
    /// instead of being joined onto the root a second time. No existence
    /// check is made; a non-existent location is a valid result.
    pub fn absolute_location(&self, filename: &str) -> PathBuf {
        let path = Path::new(filename);
        if path.is_absolute() {
            normalize_path(path)
        } else {
            normalize_path(&self.root.join(path))
        }
    }

    /// Maps a physical location back to a root-relative filename.
    ///
    /// A location outside the root yields leading `..` segments; this
    /// resolver does not enforce containment by itself.
    pub fn relative_location(&self, physical: &Path) -> String {
        relative_to(&normalize_path(physical), &self.root)
            .to_string_lossy()
            .into_owned()
    }

    /// Like [`absolute_location`](Self::absolute_location), but rejects any
    /// filename that resolves outside the root.
    pub fn contained_location(&self, filename: &str) -> Result<PathBuf, LocationError> {
        let location = self.absolute_location(filename);
        if location.starts_with(&self.root) {
            Ok(location)
        } else {
            Err(LocationError::OutsideRoot(filename.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> LocationResolver {
        LocationResolver::rooted_at("/srv/modules")
    }

    #[test]
    fn test_relative_filename_joins_onto_root() {
        assert_eq!(
            resolver().absolute_location("pkg/app.js"),
            PathBuf::from("/srv/modules/pkg/app.js")
        );
    }

    #[test]
    fn test_absolute_filename_ignores_root() {
        assert_eq!(
            resolver().absolute_location("/tmp/out/app.js"),
            PathBuf::from("/tmp/out/app.js")
        );
    }

    #[test]
    fn test_absolute_location_is_idempotent() {
        let resolver = resolver();
        let once = resolver.absolute_location("pkg/app.js");
        let twice = resolver.absolute_location(&once.to_string_lossy());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_relative_location_round_trip() {
        let resolver = resolver();
        let physical = resolver.absolute_location("pkg/./sub/../app.js");
        assert_eq!(resolver.relative_location(&physical), "pkg/app.js");
    }

    #[test]
    fn test_relative_location_outside_root_escapes() {
        assert_eq!(
            resolver().relative_location(Path::new("/etc/passwd")),
            "../../etc/passwd"
        );
    }

    #[test]
    fn test_contained_location_rejects_escapes() {
        let resolver = resolver();
        assert!(resolver.contained_location("pkg/app.js").is_ok());
        let err = resolver.contained_location("../outside.js").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("../outside.js"));
    }

    #[test]
    fn test_new_canonicalizes_existing_root() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = LocationResolver::new(dir.path()).unwrap();
        assert!(resolver.root_location().is_absolute());
    }

    #[test]
    fn test_new_fails_for_missing_root() {
        assert!(LocationResolver::new("/no/such/root/here").is_err());
    }
}
