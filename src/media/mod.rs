//! Content-type resolution
//!
//! Maps physical locations to content types by filename extension.

mod resolver;

pub use resolver::{ContentTypeResolver, ExtensionContentTypeResolver, FALLBACK_CONTENT_TYPE};
