//! Storage backend contract

use std::io;
use std::path::{Path, PathBuf};

use crate::error::FileManagerError;

/// Scoped byte-level file I/O.
///
/// The manager resolves logical filenames to physical locations before
/// calling in here; implementations only ever see resolved paths and hand
/// back resolved paths from glob expansion.
#[allow(async_fn_in_trait)]
pub trait StorageBackend {
    /// Whether a file exists at `path`.
    async fn exists(&self, path: &Path) -> bool;

    /// Reads the raw bytes at `path`.
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Writes `content` to `path`, creating missing parent directories and
    /// overwriting any existing file.
    async fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;

    /// Copies `source` over `destination`, overwriting it. Fails when the
    /// source does not exist.
    async fn copy(&self, source: &Path, destination: &Path) -> io::Result<()>;

    /// Removes the file at `path`. An absent file is not an error.
    async fn remove(&self, path: &Path) -> io::Result<()>;

    /// Expands a glob pattern to matching physical paths, in traversal order.
    async fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>, FileManagerError>;
}
