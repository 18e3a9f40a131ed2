//! Local disk storage backend
//!
//! Implements the storage contract with tokio file I/O. Glob expansion runs
//! on the blocking pool since the glob crate walks the tree synchronously.

use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use tokio::fs;
use tokio::task;

use crate::backend::StorageBackend;
use crate::error::FileManagerError;

/// Storage backend over the local filesystem.
#[derive(Debug, Default, Clone)]
pub struct LocalStorageBackend;

impl StorageBackend for LocalStorageBackend {
    async fn exists(&self, path: &Path) -> bool {
        fs::try_exists(path).await.unwrap_or(false)
    }

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path).await
    }

    async fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, content).await
    }

    async fn copy(&self, source: &Path, destination: &Path) -> io::Result<()> {
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::copy(source, destination).await.map(|_| ())
    }

    async fn remove(&self, path: &Path) -> io::Result<()> {
        match fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    async fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>, FileManagerError> {
        let expression = pattern.to_string();
        let matches = task::spawn_blocking(move || -> Result<Vec<PathBuf>, FileManagerError> {
            let mut paths = Vec::new();
            for entry in glob::glob(&expression)? {
                paths.push(entry?);
            }
            Ok(paths)
        })
        .await
        .map_err(|e| FileManagerError::IoError(io::Error::other(e)))??;

        debug!("Pattern {} matched {} paths", pattern, matches.len());
        Ok(matches)
    }
}
