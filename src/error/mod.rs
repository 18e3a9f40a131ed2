//! Error handling
//!
//! Defines error types for the file manager modules.

pub mod types;

pub use types::*;
