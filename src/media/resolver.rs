//! Content-type resolver

use std::path::Path;

/// Content type used when no mapping is known.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Maps a physical location to a content type, when one is known.
pub trait ContentTypeResolver {
    fn resolve(&self, path: &Path) -> Option<&'static str>;
}

/// Extension-table resolver covering the types a module runtime serves.
#[derive(Debug, Default, Clone)]
pub struct ExtensionContentTypeResolver;

impl ContentTypeResolver for ExtensionContentTypeResolver {
    fn resolve(&self, path: &Path) -> Option<&'static str> {
        let extension = path.extension()?.to_str()?;
        let content_type = match extension.to_ascii_lowercase().as_str() {
            "js" | "mjs" => "application/javascript",
            "json" | "map" => "application/json",
            "html" | "htm" => "text/html",
            "css" => "text/css",
            "txt" => "text/plain",
            "xml" => "text/xml",
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "svg" => "image/svg+xml",
            "ico" => "image/x-icon",
            "wasm" => "application/wasm",
            "woff" => "font/woff",
            "woff2" => "font/woff2",
            _ => return None,
        };
        Some(content_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_extensions() {
        let resolver = ExtensionContentTypeResolver;
        assert_eq!(
            resolver.resolve(Path::new("/root/pkg/app.js")),
            Some("application/javascript")
        );
        assert_eq!(
            resolver.resolve(Path::new("/root/x.segment.json")),
            Some("application/json")
        );
        assert_eq!(resolver.resolve(Path::new("logo.PNG")), Some("image/png"));
    }

    #[test]
    fn test_resolve_unknown_extension() {
        let resolver = ExtensionContentTypeResolver;
        assert_eq!(resolver.resolve(Path::new("data.bin")), None);
        assert_eq!(resolver.resolve(Path::new("no_extension")), None);
    }
}
