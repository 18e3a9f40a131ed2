//! Error types
//!
//! Defines domain-specific error types for each module of the file manager.

use std::fmt;
use std::io;

/// Location resolver errors
#[derive(Debug)]
pub enum LocationError {
    /// The configured root could not be canonicalized at construction.
    RootUnavailable(io::Error),
    /// A logical filename resolved outside the root. Raised only by the
    /// opt-in containment check, never by default resolution.
    OutsideRoot(String),
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::RootUnavailable(e) => write!(f, "Root location unavailable: {}", e),
            LocationError::OutsideRoot(name) => write!(f, "Location outside root: {}", name),
        }
    }
}

impl std::error::Error for LocationError {}

/// File manager operation errors
#[derive(Debug)]
pub enum FileManagerError {
    /// Content retrieval found no backing file. Carries the logical filename
    /// only; the resolved physical path must never appear in the message.
    FileNotFound(String),
    /// Any other filesystem-level failure, propagated from the backend.
    IoError(io::Error),
    /// A malformed glob expression.
    InvalidPattern(String),
}

impl fmt::Display for FileManagerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileManagerError::FileNotFound(name) => write!(f, "File not found: {}", name),
            FileManagerError::IoError(e) => write!(f, "IO error: {}", e),
            FileManagerError::InvalidPattern(msg) => write!(f, "Invalid pattern: {}", msg),
        }
    }
}

impl std::error::Error for FileManagerError {}

impl From<io::Error> for FileManagerError {
    fn from(error: io::Error) -> Self {
        FileManagerError::IoError(error)
    }
}

impl From<glob::PatternError> for FileManagerError {
    fn from(error: glob::PatternError) -> Self {
        FileManagerError::InvalidPattern(error.to_string())
    }
}

impl From<glob::GlobError> for FileManagerError {
    fn from(error: glob::GlobError) -> Self {
        FileManagerError::IoError(error.into())
    }
}
