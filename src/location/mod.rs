//! Location module
//!
//! Maps logical filenames onto physical locations under a fixed root
//! and back, without touching the filesystem during resolution.

pub mod normalize;
mod resolver;

pub use resolver::LocationResolver;
