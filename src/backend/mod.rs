//! Storage backend
//!
//! Byte-level file I/O consumed by the file manager, behind a trait so
//! alternative stores can slot in under the same manager logic.

mod local;
mod traits;

pub use local::LocalStorageBackend;
pub use traits::StorageBackend;
