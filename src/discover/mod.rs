//! File discovery conventions
//!
//! Suffix conventions and the pure predicates that partition a flat file
//! tree into modules, segments, generated variants, and assets.

pub mod classify;
pub mod patterns;
