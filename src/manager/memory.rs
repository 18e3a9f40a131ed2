//! In-memory file manager
//!
//! A conformant alternative to the local disk implementation, keyed by
//! root-relative filename the way an object store would be. Its root is
//! virtual and does not have to exist on disk.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tokio::sync::RwLock;

use crate::error::FileManagerError;
use crate::location::LocationResolver;
use crate::manager::FileManager;
use crate::media::{ContentTypeResolver, ExtensionContentTypeResolver, FALLBACK_CONTENT_TYPE};

/// File manager over an in-memory map.
pub struct MemoryFileManager {
    resolver: LocationResolver,
    files: RwLock<HashMap<String, Vec<u8>>>,
    media: ExtensionContentTypeResolver,
}

impl MemoryFileManager {
    /// Creates an empty manager under a virtual absolute root.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            resolver: LocationResolver::rooted_at(root),
            files: RwLock::new(HashMap::new()),
            media: ExtensionContentTypeResolver,
        }
    }

    fn key_for(&self, filename: &str) -> String {
        // Normalizes through the resolver so "pkg/./a.js" and "pkg/a.js"
        // address the same entry.
        self.resolver
            .relative_location(&self.resolver.absolute_location(filename))
    }
}

impl FileManager for MemoryFileManager {
    fn root_location(&self) -> &Path {
        self.resolver.root_location()
    }

    fn absolute_location(&self, filename: &str) -> PathBuf {
        self.resolver.absolute_location(filename)
    }

    fn relative_location(&self, physical: &Path) -> String {
        self.resolver.relative_location(physical)
    }

    async fn get_type(&self, filename: &str) -> String {
        let location = self.resolver.absolute_location(filename);
        self.media
            .resolve(&location)
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string()
    }

    async fn get_content(&self, filename: &str) -> Result<Vec<u8>, FileManagerError> {
        let key = self.key_for(filename);
        let files = self.files.read().await;
        files
            .get(&key)
            .cloned()
            .ok_or_else(|| FileManagerError::FileNotFound(filename.to_string()))
    }

    async fn store(&self, filename: &str, content: &[u8]) -> Result<(), FileManagerError> {
        let key = self.key_for(filename);
        self.files.write().await.insert(key, content.to_vec());
        Ok(())
    }

    async fn copy(&self, source: &str, destination: &str) -> Result<(), FileManagerError> {
        let source_key = self.key_for(source);
        let destination_key = self.key_for(destination);
        let mut files = self.files.write().await;
        let content = files.get(&source_key).cloned().ok_or_else(|| {
            FileManagerError::IoError(io::Error::new(
                io::ErrorKind::NotFound,
                format!("copy source missing: {}", source),
            ))
        })?;
        files.insert(destination_key, content);
        Ok(())
    }

    async fn remove(&self, filename: &str) -> Result<(), FileManagerError> {
        let key = self.key_for(filename);
        self.files.write().await.remove(&key);
        Ok(())
    }

    async fn match_files(&self, pattern: &str) -> Result<Vec<PathBuf>, FileManagerError> {
        // Escape the root so it matches literally even when it contains
        // glob metacharacters.
        let root = Pattern::escape(&self.resolver.root_location().display().to_string());
        let matcher = Pattern::new(&format!("{}/{}", root, pattern))?;
        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        };

        let files = self.files.read().await;
        let mut matched: Vec<PathBuf> = files
            .keys()
            .map(|name| self.resolver.absolute_location(name))
            .filter(|path| matcher.matches_path_with(path, options))
            .collect();
        // Map iteration order is arbitrary; keep runs deterministic.
        matched.sort();
        Ok(matched)
    }
}
