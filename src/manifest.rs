//! Site manifest emission: sitemap, robots, route parameters.
//!
//! Stage 2 of the inkpress pipeline. Consumes the scan manifest and writes
//! the site's externally-visible route descriptions:
//!
//! ```text
//! dist/
//! ├── sitemap.xml            # Fixed routes + one entry per dated item
//! ├── robots.txt             # Crawler rules + sitemap reference
//! └── routes/
//!     ├── posts.json         # [{"slug": "welcome"}, ...]
//!     └── snippets.json
//! ```
//!
//! ## Sitemap dates
//!
//! An item's `lastmod` is its `updatedAt`, falling back to `publishedAt`
//! when absent. Items where neither parses are skipped with a warning —
//! a sitemap entry without a usable date is worse than no entry. Fixed
//! routes (home and category indexes, from the navigation config) come
//! first and are stamped with the build date.
//!
//! ## Route parameters
//!
//! The routes manifest publishes the *full* enumerated identifier set per
//! category — including items that failed validation — so a detail route
//! exists for exactly the files on disk. Listability gates listings and
//! the sitemap, not routing.

use crate::config::SiteConfig;
use crate::scan::{Listing, Manifest};
use chrono::NaiveDate;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One externally-published route: absolute URL plus last-modified date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub url: String,
    pub last_modified: NaiveDate,
}

/// One pre-registered detail route.
#[derive(Debug, Serialize)]
pub struct RouteParam<'a> {
    pub slug: &'a str,
}

/// Build the sitemap entry list: fixed routes first, then dated items.
pub fn sitemap_entries(manifest: &Manifest, today: NaiveDate) -> Vec<ManifestEntry> {
    let base = &manifest.config.site.base_url;
    let mut entries: Vec<ManifestEntry> = manifest
        .config
        .navigation
        .iter()
        .map(|nav| ManifestEntry {
            url: fixed_route_url(base, &nav.route),
            last_modified: today,
        })
        .collect();

    for listing in &manifest.listings {
        for item in &listing.items {
            let date = item
                .record
                .date("updatedAt")
                .or_else(|| item.record.date("publishedAt"));
            match date {
                Some(date) => entries.push(ManifestEntry {
                    url: format!("{base}/{}/{}", listing.route, item.slug),
                    last_modified: date,
                }),
                None => {
                    warn!(
                        slug = %item.slug,
                        category = %listing.category,
                        "no usable updatedAt/publishedAt, skipping sitemap entry"
                    );
                }
            }
        }
    }
    entries
}

fn fixed_route_url(base: &str, route: &str) -> String {
    if route == "/" {
        base.to_string()
    } else {
        format!("{base}{route}")
    }
}

/// Render sitemap entries as a sitemaps.org urlset document.
pub fn render_sitemap_xml(entries: &[ManifestEntry]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.url)));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            entry.last_modified.format("%Y-%m-%d")
        ));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render robots.txt from the configured rule set.
///
/// No dynamic content dependency: rules, sitemap URL and host come
/// straight from config.
pub fn render_robots(config: &SiteConfig) -> String {
    let mut out = format!("User-agent: {}\n", config.robots.user_agent);
    for allow in &config.robots.allow {
        out.push_str(&format!("Allow: {allow}\n"));
    }
    for disallow in &config.robots.disallow {
        out.push_str(&format!("Disallow: {disallow}\n"));
    }
    let base = &config.site.base_url;
    out.push_str(&format!("\nSitemap: {base}/sitemap.xml\n"));
    out.push_str(&format!("Host: {base}\n"));
    out
}

/// Serialize a listing's route parameters: one entry per enumerated slug.
pub fn render_route_params(listing: &Listing) -> Result<String, EmitError> {
    let params: Vec<RouteParam> = listing
        .slugs
        .iter()
        .map(|slug| RouteParam { slug })
        .collect();
    Ok(serde_json::to_string_pretty(&params)?)
}

/// Write all manifests to the output directory. Returns the written paths.
pub fn emit(
    manifest: &Manifest,
    output_dir: &Path,
    today: NaiveDate,
) -> Result<Vec<PathBuf>, EmitError> {
    fs::create_dir_all(output_dir)?;
    let mut written = Vec::new();

    let sitemap_path = output_dir.join("sitemap.xml");
    let entries = sitemap_entries(manifest, today);
    fs::write(&sitemap_path, render_sitemap_xml(&entries))?;
    written.push(sitemap_path);

    let robots_path = output_dir.join("robots.txt");
    fs::write(&robots_path, render_robots(&manifest.config))?;
    written.push(robots_path);

    let routes_dir = output_dir.join("routes");
    fs::create_dir_all(&routes_dir)?;
    for listing in &manifest.listings {
        let path = routes_dir.join(format!("{}.json", listing.category));
        fs::write(&path, render_route_params(listing)?)?;
        written.push(path);
    }

    Ok(written)
}
