//! Local disk file manager
//!
//! Composes the location resolver with a storage backend and a content-type
//! resolver into the file-manager capability over a local directory tree.

use std::path::{Path, PathBuf};

use futures::future;
use glob::Pattern;
use log::{debug, info};

use crate::backend::{LocalStorageBackend, StorageBackend};
use crate::config::ManagerConfig;
use crate::discover::classify;
use crate::error::{FileManagerError, LocationError};
use crate::location::LocationResolver;
use crate::manager::FileManager;
use crate::media::{ContentTypeResolver, ExtensionContentTypeResolver, FALLBACK_CONTENT_TYPE};

/// File manager over a rooted local directory tree.
pub struct LocalFileManager<B = LocalStorageBackend, C = ExtensionContentTypeResolver> {
    resolver: LocationResolver,
    backend: B,
    media: C,
}

impl LocalFileManager {
    /// Creates a manager rooted at `root` with the default collaborators.
    ///
    /// Fails when the root does not exist.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, LocationError> {
        Self::with_collaborators(root, LocalStorageBackend, ExtensionContentTypeResolver)
    }

    /// Creates a manager from deployment configuration.
    pub fn from_config(config: &ManagerConfig) -> Result<Self, LocationError> {
        let manager = Self::new(&config.root)?;
        info!("File manager rooted at {}", manager.root_location().display());
        Ok(manager)
    }
}

impl<B, C> LocalFileManager<B, C>
where
    B: StorageBackend,
    C: ContentTypeResolver,
{
    /// Creates a manager with explicit backend and content-type collaborators.
    pub fn with_collaborators(
        root: impl AsRef<Path>,
        backend: B,
        media: C,
    ) -> Result<Self, LocationError> {
        Ok(Self {
            resolver: LocationResolver::new(root)?,
            backend,
            media,
        })
    }

    /// The location resolver this manager is built on.
    pub fn resolver(&self) -> &LocationResolver {
        &self.resolver
    }

    fn scoped_pattern(&self, pattern: &str) -> String {
        // The root is a literal path, not a glob; escape it so a root
        // containing metacharacters like `[` still scopes the expansion.
        let root = Pattern::escape(&self.resolver.root_location().display().to_string());
        format!("{}/{}", root, pattern)
    }
}

impl<B, C> FileManager for LocalFileManager<B, C>
where
    B: StorageBackend,
    C: ContentTypeResolver,
{
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
        let location = self.resolver.absolute_location(filename);
        if !self.backend.exists(&location).await {
            return Err(FileManagerError::FileNotFound(filename.to_string()));
        }
        let content = self.backend.read(&location).await?;
        debug!("Read {} ({} bytes)", filename, content.len());
        Ok(content)
    }

    async fn store(&self, filename: &str, content: &[u8]) -> Result<(), FileManagerError> {
        let location = self.resolver.absolute_location(filename);
        self.backend.write(&location, content).await?;
        info!("Stored {} ({} bytes)", filename, content.len());
        Ok(())
    }

    async fn copy(&self, source: &str, destination: &str) -> Result<(), FileManagerError> {
        let from = self.resolver.absolute_location(source);
        let to = self.resolver.absolute_location(destination);
        self.backend.copy(&from, &to).await?;
        info!("Copied {} to {}", source, destination);
        Ok(())
    }

    async fn remove(&self, filename: &str) -> Result<(), FileManagerError> {
        let location = self.resolver.absolute_location(filename);
        self.backend.remove(&location).await?;
        info!("Removed {}", filename);
        Ok(())
    }

    async fn match_files(&self, pattern: &str) -> Result<Vec<PathBuf>, FileManagerError> {
        self.backend.glob(&self.scoped_pattern(pattern)).await
    }

    async fn get_asset_files(
        &self,
        asset_patterns: &[String],
    ) -> Result<Vec<String>, FileManagerError> {
        // One expansion per pattern, all joined before filtering. The first
        // failure drops the remaining expansions and fails the call, so a
        // partial result is never observed.
        let expansions = future::try_join_all(
            asset_patterns.iter().map(|pattern| self.match_files(pattern)),
        )
        .await?;

        let mut assets = Vec::new();
        for matched in expansions {
            for path in matched {
                let filename = self.resolver.relative_location(&path);
                if !classify::is_generated_variant(&filename) {
                    assets.push(filename);
                }
            }
        }
        Ok(assets)
    }
}
