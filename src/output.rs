//! CLI output formatting for all pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every item is its semantic identity — positional index + title —
//! with the source file shown as secondary context via an indented
//! `Source:` line. The output reads as a content inventory while still
//! letting users trace every item back to a file.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Posts (/post)
//! 001 Welcome to my blog
//!     Source: post/welcome.mdx
//!     Published: January 1, 2023 (2y ago)
//!     3 min read (512 words)
//!
//! Snippets (/snippets)
//! 001 useDebounce (3 snippets)
//!     Source: snippets/use-debounce.mdx
//!
//! Skipped
//!     posts/incomplete — missing fields: readTime
//! ```
//!
//! ## Emit
//!
//! ```text
//! sitemap.xml (5 entries)
//! robots.txt
//! routes/posts.json (2 routes)
//! routes/snippets.json (1 route)
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects. Diagnostics (skip
//! reasons, reading-time drift) go through `tracing` at scan time; here
//! they are only summarized for the inventory.

use crate::dates;
use crate::listing::{ContentItem, PageQuery, Paged};
use crate::manifest::ManifestEntry;
use crate::scan::{Listing, Manifest};
use crate::slug::CONTENT_EXT;
use crate::text;
use chrono::NaiveDate;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Header line for one item: index + title, with an optional count detail.
///
/// Items without a `title` field fall back to the slug in parens; the
/// file name is then the identity.
fn item_header(index: usize, item: &ContentItem) -> String {
    let detail = item
        .record
        .get_int("snippetCount")
        .map(|n| format!(" ({n} snippets)"))
        .unwrap_or_default();
    match item.record.get_str("title") {
        Some(title) if !title.is_empty() => {
            format!("{} {}{}", format_index(index), title, detail)
        }
        _ => format!("{} ({}){}", format_index(index), item.slug, detail),
    }
}

// ============================================================================
// Scan output
// ============================================================================

/// Format the scan inventory: one section per category, then skipped items.
pub fn format_scan_output(manifest: &Manifest, today: NaiveDate) -> Vec<String> {
    let mut lines = Vec::new();

    for listing in &manifest.listings {
        lines.push(format!("{} (/{})", capitalize(&listing.category), listing.route));
        if listing.items.is_empty() {
            lines.push(format!("    No {} yet", listing.category));
        }
        for (idx, item) in listing.items.iter().enumerate() {
            lines.extend(format_item(idx + 1, listing, item, today));
        }
        lines.push(String::new());
    }

    let skipped: Vec<String> = manifest
        .listings
        .iter()
        .flat_map(|listing| {
            listing
                .skipped
                .iter()
                .map(|skip| format!("    {}/{} — {}", listing.category, skip.slug, skip.reason))
        })
        .collect();
    if !skipped.is_empty() {
        lines.push("Skipped".to_string());
        lines.extend(skipped);
        lines.push(String::new());
    }

    let total: usize = manifest.listings.iter().map(|l| l.items.len()).sum();
    lines.push(format!("Scanned {total} items"));
    lines
}

fn format_item(
    index: usize,
    listing: &Listing,
    item: &ContentItem,
    today: NaiveDate,
) -> Vec<String> {
    let mut lines = vec![item_header(index, item)];
    lines.push(format!(
        "    Source: {}/{}{CONTENT_EXT}",
        listing.dir, item.slug
    ));
    if let Some(published) = item.record.date("publishedAt") {
        lines.push(format!(
            "    Published: {}",
            dates::format_human(published, today)
        ));
    }
    if let Some(declared) = item.record.get_int("readTime") {
        let words = text::word_count(&item.record.body);
        lines.push(format!("    {declared} min read ({words} words)"));
    }
    lines
}

/// Print the scan inventory to stdout.
pub fn print_scan_output(manifest: &Manifest, today: NaiveDate) {
    for line in format_scan_output(manifest, today) {
        println!("{line}");
    }
}

// ============================================================================
// Check diagnostics
// ============================================================================

/// Format check diagnostics: skip reasons plus reading-time drift.
///
/// A declared `readTime` more than one minute away from the estimate
/// computed off the body is flagged.
pub fn format_diagnostics(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    for listing in &manifest.listings {
        for skip in &listing.skipped {
            lines.push(format!(
                "warning: {}/{}: {}",
                listing.category, skip.slug, skip.reason
            ));
        }
        for item in &listing.items {
            let Some(declared) = item.record.get_int("readTime") else {
                continue;
            };
            let estimated = text::reading_time(text::word_count(&item.record.body)) as i64;
            if (declared - estimated).abs() > 1 {
                lines.push(format!(
                    "warning: {}/{}: declared readTime {declared} min, body reads in ~{estimated} min",
                    listing.category, item.slug
                ));
            }
        }
    }
    lines
}

/// Print check diagnostics to stdout.
pub fn print_diagnostics(manifest: &Manifest) {
    for line in format_diagnostics(manifest) {
        println!("{line}");
    }
}

// ============================================================================
// List output
// ============================================================================

/// Format one page of a category listing.
///
/// Indices are positions in the full sorted listing, so page 2 of a
/// 4-per-page listing starts at 005.
pub fn format_list_output(
    listing: &Listing,
    paged: &Paged,
    query: &PageQuery,
    today: NaiveDate,
) -> Vec<String> {
    let mut lines = vec![format!(
        "{} (/{}) page {} of {}",
        capitalize(&listing.category),
        listing.route,
        query.page,
        paged.total_pages
    )];
    if paged.items.is_empty() {
        lines.push(format!("    No {} on this page", listing.category));
        return lines;
    }
    for (idx, item) in paged.items.iter().enumerate() {
        lines.extend(format_item(query.offset() + idx + 1, listing, item, today));
    }
    lines
}

/// Print one listing page to stdout.
pub fn print_list_output(listing: &Listing, paged: &Paged, query: &PageQuery, today: NaiveDate) {
    for line in format_list_output(listing, paged, query, today) {
        println!("{line}");
    }
}

// ============================================================================
// Emit output
// ============================================================================

/// Format the emit summary: generated manifests with entry counts.
pub fn format_emit_output(manifest: &Manifest, entries: &[ManifestEntry]) -> Vec<String> {
    let mut lines = vec![
        format!("sitemap.xml ({} entries)", entries.len()),
        "robots.txt".to_string(),
    ];
    for listing in &manifest.listings {
        let routes = listing.slugs.len();
        let noun = if routes == 1 { "route" } else { "routes" };
        lines.push(format!(
            "routes/{}.json ({routes} {noun})",
            listing.category
        ));
    }
    lines
}

/// Print the emit summary to stdout.
pub fn print_emit_output(manifest: &Manifest, entries: &[ManifestEntry]) {
    for line in format_emit_output(manifest, entries) {
        println!("{line}");
    }
}
