//! Shared test utilities for the inkpress test suite.
//!
//! Provides content fixture writers (valid posts/snippets plus raw
//! documents for broken-content cases), front matter record builders,
//! and an in-memory [`ContentLoader`] for exercising listing assembly
//! without a filesystem.

use std::collections::HashMap;
use std::path::Path;

use crate::loader::{ContentLoader, ContentRecord, LoadError, parse_document};

// =========================================================================
// Fixture writers
// =========================================================================

/// Write a file under `root`, creating parent directories.
pub fn write_raw(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

/// Write a valid post under `root/post/<slug>.mdx`.
///
/// The body is two words, so the declared `readTime = 1` agrees with the
/// computed estimate.
pub fn write_post(root: &Path, slug: &str, title: &str, published: &str) {
    let doc = format!(
        "+++\n\
         title = \"{title}\"\n\
         summary = \"{title}\"\n\
         publishedAt = \"{published}\"\n\
         readTime = 1\n\
         +++\n\
         \n\
         Hello, world.\n"
    );
    write_raw(root, &format!("post/{slug}.mdx"), &doc);
}

/// Write a valid snippet under `root/snippets/<slug>.mdx`.
pub fn write_snippet(root: &Path, slug: &str, title: &str, count: u32) {
    let doc = format!(
        "+++\n\
         title = \"{title}\"\n\
         snippetCount = {count}\n\
         subtitle = \"{title} snippets\"\n\
         image = \"/images/{slug}.png\"\n\
         +++\n\
         \n\
         ```ts\nexport {{}};\n```\n"
    );
    write_raw(root, &format!("snippets/{slug}.mdx"), &doc);
}

// =========================================================================
// Record builders
// =========================================================================

/// A complete post record with the given title and publish date.
pub fn post_record(title: &str, published: &str) -> ContentRecord {
    parse_document(&format!(
        "+++\n\
         title = \"{title}\"\n\
         summary = \"{title}\"\n\
         publishedAt = \"{published}\"\n\
         readTime = 1\n\
         +++\n\
         body\n"
    ))
    .unwrap()
}

/// A record with exactly the given string fields.
pub fn record_with(fields: &[(&str, &str)]) -> ContentRecord {
    let front: String = fields
        .iter()
        .map(|(key, value)| format!("{key} = \"{value}\"\n"))
        .collect();
    parse_document(&format!("+++\n{front}+++\n")).unwrap()
}

// =========================================================================
// In-memory loader
// =========================================================================

/// Loader backed by a map, for assembly tests. Unknown identifiers fail
/// with a not-found IO error, like the filesystem loader would.
pub struct MemoryLoader {
    records: HashMap<(String, String), ContentRecord>,
}

impl MemoryLoader {
    pub fn new(entries: &[(&str, &str, ContentRecord)]) -> Self {
        let records = entries
            .iter()
            .map(|(dir, slug, record)| ((dir.to_string(), slug.to_string()), record.clone()))
            .collect();
        Self { records }
    }
}

impl ContentLoader for MemoryLoader {
    fn load(&self, category_dir: &str, slug: &str) -> Result<ContentRecord, LoadError> {
        self.records
            .get(&(category_dir.to_string(), slug.to_string()))
            .cloned()
            .ok_or_else(|| {
                LoadError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("no record for {category_dir}/{slug}"),
                ))
            })
    }
}
