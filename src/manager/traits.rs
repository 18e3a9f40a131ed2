//! File manager capability
//!
//! The full operation set any file store must offer the module-loading
//! runtime: location resolution, content access, and file discovery.

use std::path::{Path, PathBuf};

use crate::discover::{classify, patterns};
use crate::error::FileManagerError;

/// A file loaded with its content-type metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// The logical filename the record was loaded under.
    pub filename: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

/// Access to a rooted file tree.
///
/// Every operation is stateless and safe to issue concurrently; the only
/// state behind an implementation is its immutable root. No ordering is
/// guaranteed between concurrent operations on different files, and two
/// concurrent writes to the same filename are last-writer-wins.
#[allow(async_fn_in_trait)]
pub trait FileManager {
    /// The canonical absolute root of the managed tree.
    fn root_location(&self) -> &Path;

    /// Resolves a logical filename to an absolute physical location.
    fn absolute_location(&self, filename: &str) -> PathBuf;

    /// Converts a physical location back to a root-relative filename.
    fn relative_location(&self, physical: &Path) -> String;

    /// The content type for `filename`, falling back to a generic binary
    /// type when no mapping is known. Never fails.
    async fn get_type(&self, filename: &str) -> String;

    /// The raw bytes of `filename`.
    ///
    /// Fails with [`FileManagerError::FileNotFound`] when no backing file
    /// exists; the error carries the logical filename only.
    async fn get_content(&self, filename: &str) -> Result<Vec<u8>, FileManagerError>;

    /// Loads content and content type as a single record.
    async fn load(&self, filename: &str) -> Result<FileRecord, FileManagerError> {
        let content_type = self.get_type(filename).await;
        let content = self.get_content(filename).await?;
        Ok(FileRecord {
            filename: filename.to_string(),
            content_type,
            content,
        })
    }

    /// Writes `content` to `filename`, creating missing intermediate
    /// directories and overwriting any existing file.
    async fn store(&self, filename: &str, content: &[u8]) -> Result<(), FileManagerError>;

    /// Copies `source` over `destination`. Fails when the source is absent.
    async fn copy(&self, source: &str, destination: &str) -> Result<(), FileManagerError>;

    /// Removes `filename`. Succeeds silently when already absent.
    async fn remove(&self, filename: &str) -> Result<(), FileManagerError>;

    /// Expands a glob pattern rooted at the managed tree, returning matching
    /// physical locations in traversal order. Callers must not rely on the
    /// ordering.
    async fn match_files(&self, pattern: &str) -> Result<Vec<PathBuf>, FileManagerError>;

    /// All module files under the root.
    async fn get_module_file_names(&self) -> Result<Vec<PathBuf>, FileManagerError> {
        self.match_files(patterns::MODULE_FILES).await
    }

    /// All segment files under the root.
    async fn get_segment_files(&self) -> Result<Vec<PathBuf>, FileManagerError> {
        self.match_files(patterns::SEGMENT_FILES).await
    }

    /// All node-local segment files under the root.
    async fn get_node_segment_files(&self) -> Result<Vec<PathBuf>, FileManagerError> {
        self.match_files(patterns::NODE_SEGMENT_FILES).await
    }

    /// All repository segment files under the root.
    async fn get_repository_segment_files(&self) -> Result<Vec<PathBuf>, FileManagerError> {
        self.match_files(patterns::REPOSITORY_SEGMENT_FILES).await
    }

    /// Root-relative filenames of the hand-authored assets matched by
    /// `asset_patterns`.
    ///
    /// Every pattern is expanded and the results are unioned in pattern
    /// order, keeping duplicates from overlapping patterns; generated
    /// variants are then dropped. One failing pattern fails the whole call.
    async fn get_asset_files(
        &self,
        asset_patterns: &[String],
    ) -> Result<Vec<String>, FileManagerError> {
        let mut assets = Vec::new();
        for pattern in asset_patterns {
            for path in self.match_files(pattern).await? {
                let filename = self.relative_location(&path);
                if !classify::is_generated_variant(&filename) {
                    assets.push(filename);
                }
            }
        }
        Ok(assets)
    }
}
