//! # inkpress
//!
//! A minimal static-site content pipeline for developer blogs and snippet
//! collections. Your filesystem is the content database: each category's
//! `.mdx` files live under the content root, front matter is TOML between
//! `+++` fences, and the file path is the canonical identity of every item.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! Content flows through two independent stages, with a JSON manifest in
//! between:
//!
//! ```text
//! 1. Scan   content/  →  listing.json   (discovery + validation + sort)
//! 2. Emit   listing   →  dist/          (sitemap.xml, robots.txt, routes/*.json)
//! ```
//!
//! The separation exists for the usual reasons:
//!
//! - **Debuggability**: the listing manifest is human-readable JSON you can
//!   inspect when an item is missing from the site.
//! - **Testability**: each stage is a function from manifest to manifest,
//!   so pipeline logic is unit-testable without a content tree.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: walks content directories, assembles per-category listings |
//! | [`manifest`] | Stage 2: emits sitemap, robots.txt and route-parameter manifests |
//! | [`listing`] | Listing assembly, published-date sort, pagination |
//! | [`loader`] | Front matter parsing and the [`loader::ContentLoader`] seam |
//! | [`validate`] | Required-field contracts (presence, not truthiness) |
//! | [`slug`] | Canonical slug derivation from content-relative paths |
//! | [`config`] | `config.toml` loading and validation |
//! | [`dates`] | Tolerant date parsing and human-readable display |
//! | [`text`] | Word counts and reading-time estimates |
//! | [`output`] | CLI output formatting: inventory and diagnostics display |
//!
//! # Design Decisions
//!
//! ## Presence-Based Validation
//!
//! A required field is satisfied by existing, not by being truthy.
//! `readTime = 0` is a present field. Listability is a structural question
//! about the front matter; value judgments belong to the author.
//!
//! ## Per-Item Failure Isolation
//!
//! One broken document never fails a build. Load errors, TOML errors and
//! contract violations drop the item, log a warning with its slug, and the
//! listing carries on. A missing content directory is "no content yet",
//! which renders as an empty listing. Only a broken `config.toml` stops
//! the pipeline.
//!
//! ## Rebuild From Scratch, Every Time
//!
//! There is no cache and no incremental state. Every scan re-reads the
//! content root, so there is nothing to invalidate and nothing to go
//! stale, at the cost of re-parsing tens to low hundreds of files per
//! build. Metadata loads fan out across the rayon pool and join before
//! sorting, which keeps the wall-clock cost of that choice small.
//!
//! ## Routes Cover Files, Listings Cover Valid Files
//!
//! The route-parameter manifests publish every enumerated identifier, so
//! each file on disk gets a detail route even when its metadata is
//! incomplete. Listings and the sitemap publish only items that satisfy
//! their category contract. The two sets are intentionally different.

pub mod config;
pub mod dates;
pub mod listing;
pub mod loader;
pub mod manifest;
pub mod output;
pub mod scan;
pub mod slug;
pub mod text;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_helpers;
