//! Content loading: file retrieval and front matter parsing.
//!
//! A content document is an `.mdx` file with a TOML front matter block
//! fenced by `+++` lines, followed by the markdown body:
//!
//! ```text
//! +++
//! title = "Welcome to my blog"
//! summary = "Welcome to my blog"
//! publishedAt = "2023-01-01"
//! readTime = 3
//! +++
//!
//! Hello, world.
//! ```
//!
//! Loading goes through the [`ContentLoader`] trait so listing assembly is
//! decoupled from where documents actually come from — the filesystem in
//! production ([`FsLoader`]), an in-memory map in tests. The trait contract
//! is simply "given a category and a slug, return the record or fail"; a
//! failure affects that one item, never the whole listing.
//!
//! Field access on [`ContentRecord`] is presence-based: a field that exists
//! with value `0`, `""` or `false` is present. Validation tests presence,
//! not truthiness.

use crate::dates;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing front matter: document must start with a +++ fence")]
    MissingFrontMatter,
    #[error("unterminated front matter: no closing +++ fence")]
    UnterminatedFrontMatter,
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Parsed content document: front matter fields plus the markdown body.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ContentRecord {
    /// Front matter fields, as parsed TOML values.
    pub fields: toml::Table,
    /// Markdown body after the closing fence.
    pub body: String,
}

impl ContentRecord {
    /// Whether a field is present, regardless of its value.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// String value of a field, if present and a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(|v| v.as_str())
    }

    /// Integer value of a field, if present and an integer.
    pub fn get_int(&self, field: &str) -> Option<i64> {
        self.fields.get(field).and_then(|v| v.as_integer())
    }

    /// Parse a field as a calendar date.
    ///
    /// Accepts TOML string values (`"2023-01-01"`, RFC 3339) and bare TOML
    /// date/datetime values. Returns `None` when the field is absent or
    /// unparsable.
    pub fn date(&self, field: &str) -> Option<chrono::NaiveDate> {
        match self.fields.get(field)? {
            toml::Value::String(s) => dates::parse(s),
            toml::Value::Datetime(dt) => dates::parse(&dt.to_string()),
            _ => None,
        }
    }
}

/// Split a document into front matter and body and parse the front matter.
pub fn parse_document(source: &str) -> Result<ContentRecord, LoadError> {
    let mut lines = source.lines();
    match lines.next() {
        Some(line) if line.trim_end() == "+++" => {}
        _ => return Err(LoadError::MissingFrontMatter),
    }

    let mut front = String::new();
    let mut body_lines = Vec::new();
    let mut terminated = false;
    for line in lines {
        if !terminated && line.trim_end() == "+++" {
            terminated = true;
            continue;
        }
        if terminated {
            body_lines.push(line);
        } else {
            front.push_str(line);
            front.push('\n');
        }
    }
    if !terminated {
        return Err(LoadError::UnterminatedFrontMatter);
    }

    let fields: toml::Table = toml::from_str(&front)?;
    Ok(ContentRecord {
        fields,
        body: body_lines.join("\n"),
    })
}

/// Source of content records, keyed by category directory and slug.
pub trait ContentLoader: Sync {
    /// Load the record for one identifier, or fail for that item alone.
    fn load(&self, category_dir: &str, slug: &str) -> Result<ContentRecord, LoadError>;
}

/// Filesystem-backed loader: reads `<content-root>/<dir>/<slug>.mdx`.
pub struct FsLoader {
    content_root: PathBuf,
}

impl FsLoader {
    pub fn new(content_root: &Path) -> Self {
        Self {
            content_root: content_root.to_path_buf(),
        }
    }

    /// Path a given slug resolves to. Slugs use forward slashes for
    /// nesting; `join` maps them onto the host's separators.
    pub fn document_path(&self, category_dir: &str, slug: &str) -> PathBuf {
        self.content_root
            .join(category_dir)
            .join(format!("{slug}{}", crate::slug::CONTENT_EXT))
    }
}

impl ContentLoader for FsLoader {
    fn load(&self, category_dir: &str, slug: &str) -> Result<ContentRecord, LoadError> {
        let path = self.document_path(category_dir, slug);
        let source = fs::read_to_string(&path)?;
        parse_document(&source)
    }
}
