//! Runtime file manager
//!
//! Abstracts access to a rooted local file tree for a module-loading
//! runtime: resolves logical filenames to physical locations, reads and
//! writes file content, and discovers files by role (executable modules,
//! configuration segments, static assets) using suffix naming conventions.

pub mod backend;
pub mod config;
pub mod discover;
pub mod error;
pub mod location;
pub mod manager;
pub mod media;

pub use config::ManagerConfig;
pub use error::{FileManagerError, LocationError};
pub use location::LocationResolver;
pub use manager::{FileManager, FileRecord, LocalFileManager, MemoryFileManager};
