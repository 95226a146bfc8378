//! Canonical slug derivation for content files.
//!
//! Every discoverable content item is named by a slug derived from its path
//! relative to the category's content root. The derivation is deliberately
//! minimal:
//!
//! - the `.mdx` extension is stripped (exactly once, from the end)
//! - every path separator becomes a forward slash
//!
//! Nothing else is normalized — no case folding, no whitespace handling.
//! A file named `Guides/Setup.mdx` keeps its capitalization in the slug.
//! The same directory layout therefore yields the same slug on every host
//! OS, and the slug doubles as the URL path segment for the item's detail
//! route (`/post/guides/setup`).

/// Extension that marks a file as a content document.
pub const CONTENT_EXT: &str = ".mdx";

/// Derive a canonical slug from a content-root-relative path.
///
/// The input is a relative path string as produced by the enumerator
/// (or a caller constructing one by hand). Backslashes are treated as
/// path separators so that slugs agree across Windows and Unix hosts:
///
/// - `"welcome.mdx"` → `"welcome"`
/// - `"guides/setup.mdx"` → `"guides/setup"`
/// - `"guides\\setup.mdx"` → `"guides/setup"`
pub fn derive(rel_path: &str) -> String {
    let normalized = rel_path.replace('\\', "/");
    normalized
        .strip_suffix(CONTENT_EXT)
        .unwrap_or(&normalized)
        .to_string()
}

/// Whether a file name marks a content document.
pub fn is_content_file(file_name: &str) -> bool {
    file_name.ends_with(CONTENT_EXT)
}
