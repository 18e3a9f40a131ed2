//! File manager
//!
//! The file-manager capability and its implementations: local disk and an
//! in-memory store used where a disk root is unwanted.

mod local;
mod memory;
mod traits;

pub use local::LocalFileManager;
pub use memory::MemoryFileManager;
pub use traits::{FileManager, FileRecord};
