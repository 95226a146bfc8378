//! Content discovery and listing manifest generation.
//!
//! Stage 1 of the inkpress pipeline. Walks each category's content
//! directory, derives canonical slugs, loads and validates front matter,
//! and produces a structured manifest the emit stage consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                         # Content root
//! ├── config.toml                  # Site configuration (optional)
//! ├── post/                        # Posts category
//! │   ├── welcome.mdx              # → slug "welcome"
//! │   └── guides/
//! │       └── setup.mdx            # → slug "guides/setup"
//! └── snippets/                    # Snippets category
//!     └── use-debounce.mdx
//! ```
//!
//! Directory nesting is allowed and flattens into the slug via forward
//! slashes. Only `.mdx` files are discovered; everything else is ignored.
//!
//! ## Failure semantics
//!
//! A missing or unreadable category directory is not a bug — it means "no
//! content yet" and enumerates to an empty set. Per-item load and
//! validation failures drop the item and keep the listing. Only a broken
//! `config.toml` fails the scan as a whole.

use crate::config::{self, CategoryConfig, SiteConfig};
use crate::listing::{self, ContentItem, Skipped};
use crate::loader::FsLoader;
use crate::slug;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::warn;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub listings: Vec<Listing>,
    pub config: SiteConfig,
}

impl Manifest {
    /// Look up a listing by category name.
    pub fn listing(&self, category: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.category == category)
    }
}

/// One category's discovered content.
#[derive(Debug, Serialize, Deserialize)]
pub struct Listing {
    /// Category name (config `[[category]].name`).
    pub category: String,
    /// Directory under the content root the category was scanned from.
    pub dir: String,
    /// URL route prefix for detail pages.
    pub route: String,
    /// Every enumerated identifier in traversal order, listable or not.
    /// This is the set the route-params manifest publishes.
    pub slugs: Vec<String>,
    /// Valid items, sorted by `publishedAt` descending.
    pub items: Vec<ContentItem>,
    /// Items dropped during assembly, with reasons.
    pub skipped: Vec<Skipped>,
}

/// Scan the content root into a manifest, loading `config.toml` on the way.
pub fn scan(content_root: &Path) -> Result<Manifest, ScanError> {
    let config = config::load_config(content_root)?;
    Ok(scan_with_config(content_root, config))
}

/// Scan with an already-loaded configuration.
pub fn scan_with_config(content_root: &Path, config: SiteConfig) -> Manifest {
    let loader = FsLoader::new(content_root);
    let listings = config
        .categories
        .iter()
        .map(|category| scan_category(content_root, category, &loader))
        .collect();
    Manifest { listings, config }
}

fn scan_category(content_root: &Path, category: &CategoryConfig, loader: &FsLoader) -> Listing {
    let slugs = enumerate(&content_root.join(&category.dir));
    let (mut items, skipped) = listing::assemble(&slugs, loader, category);
    listing::sort_by_published(&mut items);
    Listing {
        category: category.name.clone(),
        dir: category.dir.clone(),
        route: category.route.clone(),
        slugs,
        items,
        skipped,
    }
}

/// Enumerate content files under a category root.
///
/// Walks the tree recursively in sorted traversal order and derives one
/// slug per regular `.mdx` file. A missing root yields an empty set;
/// callers treat "zero identifiers" as "no content yet", never as an
/// error. Unreadable entries are logged and skipped.
pub fn enumerate(root: &Path) -> Vec<String> {
    if !root.is_dir() {
        warn!(root = %root.display(), "content directory missing, treating as empty");
        return Vec::new();
    }

    let mut slugs = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(%err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !slug::is_content_file(&name) {
            continue;
        }
        // strip_prefix cannot fail: every entry is under root
        let rel = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_string_lossy();
        slugs.push(slug::derive(&rel));
    }
    slugs
}
