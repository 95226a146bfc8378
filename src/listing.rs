//! Listing assembly, sorting, and pagination.
//!
//! A listing is built fresh from the content root on every run: enumerate
//! identifiers, load each item's metadata, validate it against the
//! category contract, keep what passes. Per-item failures degrade the
//! listing instead of failing it — a broken draft never takes down the
//! whole site.
//!
//! Metadata loads are independent, so assembly fans them out across the
//! rayon pool and joins before sorting. `par_iter().map(...).collect()`
//! preserves input order, which matters: enumeration order is the
//! tie-breaker for the published-date sort.

use crate::config::CategoryConfig;
use crate::loader::{ContentLoader, ContentRecord};
use crate::validate::validate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use tracing::warn;

/// One discoverable content item: canonical slug plus its parsed record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub slug: String,
    pub record: ContentRecord,
}

/// An item dropped during assembly, with a human-readable reason.
///
/// Kept in the listing so `check` can report what was excluded and why
/// without re-running the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skipped {
    pub slug: String,
    pub reason: String,
}

enum Outcome {
    Valid(ContentItem),
    Dropped(Skipped),
}

/// Load and validate every enumerated identifier, in parallel.
///
/// Returns valid items in enumeration order, plus the dropped items.
/// Load failures and validation failures are logged and skipped; this
/// function itself cannot fail.
pub fn assemble<L: ContentLoader>(
    slugs: &[String],
    loader: &L,
    category: &CategoryConfig,
) -> (Vec<ContentItem>, Vec<Skipped>) {
    let outcomes: Vec<Outcome> = slugs
        .par_iter()
        .map(|slug| {
            let record = match loader.load(&category.dir, slug) {
                Ok(record) => record,
                Err(err) => {
                    warn!(slug = %slug, %err, "failed to load content, skipping");
                    return Outcome::Dropped(Skipped {
                        slug: slug.clone(),
                        reason: format!("load failed: {err}"),
                    });
                }
            };
            match validate(&record, &category.required, slug) {
                Ok(()) => Outcome::Valid(ContentItem {
                    slug: slug.clone(),
                    record,
                }),
                Err(missing) => Outcome::Dropped(Skipped {
                    slug: slug.clone(),
                    reason: format!("missing fields: {}", missing.join(", ")),
                }),
            }
        })
        .collect();

    let mut items = Vec::new();
    let mut skipped = Vec::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Valid(item) => items.push(item),
            Outcome::Dropped(skip) => skipped.push(skip),
        }
    }
    (items, skipped)
}

/// Sort items by `publishedAt`, newest first.
///
/// The sort is stable: items with equal dates keep their enumeration
/// order, and items whose date is absent or unparsable sort after every
/// dated item, also in enumeration order.
pub fn sort_by_published(items: &mut [ContentItem]) {
    // Reverse(None) > Reverse(Some(_)), so undated items land at the end.
    items.sort_by_key(|item| Reverse(item.record.date("publishedAt")));
}

/// Pagination request: 1-based page number and page size, both >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: usize,
    pub limit: usize,
}

impl PageQuery {
    /// Parse request-style string parameters with fallback defaults.
    ///
    /// Absent, malformed, or zero values fall back to page 1 and the
    /// category's page size. A bad query string must never error.
    pub fn from_params(page: Option<&str>, limit: Option<&str>, default_limit: usize) -> Self {
        let page = page
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|&p| p >= 1)
            .unwrap_or(1);
        let limit = limit
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|&l| l >= 1)
            .unwrap_or_else(|| default_limit.max(1));
        Self { page, limit }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.limit
    }
}

/// One page of a listing.
#[derive(Debug)]
pub struct Paged<'a> {
    pub items: &'a [ContentItem],
    pub total_pages: usize,
}

/// Slice a sorted listing into one page.
///
/// A page past the end yields an empty slice, not an error; an empty
/// listing has zero pages.
pub fn paginate<'a>(items: &'a [ContentItem], query: &PageQuery) -> Paged<'a> {
    let total_pages = items.len().div_ceil(query.limit);
    let offset = query.offset();
    let page_items = if offset >= items.len() {
        &[]
    } else {
        let end = (offset + query.limit).min(items.len());
        &items[offset..end]
    };
    Paged {
        items: page_items,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{post_record, record_with, MemoryLoader};

    fn posts_category() -> CategoryConfig {
        crate::config::SiteConfig::default()
            .category("posts")
            .unwrap()
            .clone()
    }

    fn slugs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    // =========================================================================
    // assemble() tests
    // =========================================================================

    #[test]
    fn assembles_valid_items_in_enumeration_order() {
        let category = posts_category();
        let loader = MemoryLoader::new(&[
            ("post", "b", post_record("B", "2023-02-01")),
            ("post", "a", post_record("A", "2023-01-01")),
            ("post", "c", post_record("C", "2023-03-01")),
        ]);

        let (items, skipped) = assemble(&slugs(&["b", "a", "c"]), &loader, &category);
        let order: Vec<&str> = items.iter().map(|i| i.slug.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
        assert!(skipped.is_empty());
    }

    #[test]
    fn invalid_item_dropped_not_fatal() {
        let category = posts_category();
        let loader = MemoryLoader::new(&[
            ("post", "good", post_record("Good", "2023-01-01")),
            ("post", "bad", record_with(&[("title", "No readTime")])),
        ]);

        let (items, skipped) = assemble(&slugs(&["good", "bad"]), &loader, &category);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].slug, "good");
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].slug, "bad");
        assert!(skipped[0].reason.contains("missing fields"));
    }

    #[test]
    fn load_failure_dropped_not_fatal() {
        let category = posts_category();
        let loader = MemoryLoader::new(&[("post", "only", post_record("Only", "2023-01-01"))]);

        let (items, skipped) = assemble(&slugs(&["only", "ghost"]), &loader, &category);
        assert_eq!(items.len(), 1);
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].slug, "ghost");
        assert!(skipped[0].reason.contains("load failed"));
    }

    #[test]
    fn all_assembled_items_satisfy_contract() {
        let category = posts_category();
        let loader = MemoryLoader::new(&[
            ("post", "a", post_record("A", "2023-01-01")),
            ("post", "b", record_with(&[("summary", "no title")])),
        ]);

        let (items, _) = assemble(&slugs(&["a", "b"]), &loader, &category);
        for item in &items {
            for field in &category.required {
                assert!(item.record.contains(field), "{} missing {field}", item.slug);
            }
        }
    }

    #[test]
    fn empty_slug_set_is_empty_listing() {
        let category = posts_category();
        let loader = MemoryLoader::new(&[]);
        let (items, skipped) = assemble(&[], &loader, &category);
        assert!(items.is_empty());
        assert!(skipped.is_empty());
    }

    // =========================================================================
    // sort_by_published() tests
    // =========================================================================

    fn item(slug: &str, published: Option<&str>) -> ContentItem {
        let record = match published {
            Some(date) => post_record(slug, date),
            None => record_with(&[("title", slug)]),
        };
        ContentItem {
            slug: slug.to_string(),
            record,
        }
    }

    #[test]
    fn sorts_newest_first() {
        let mut items = vec![
            item("old", Some("2021-01-01")),
            item("new", Some("2023-01-01")),
            item("mid", Some("2022-01-01")),
        ];
        sort_by_published(&mut items);
        let order: Vec<&str> = items.iter().map(|i| i.slug.as_str()).collect();
        assert_eq!(order, vec!["new", "mid", "old"]);
    }

    #[test]
    fn equal_dates_keep_enumeration_order() {
        let mut items = vec![
            item("first", Some("2023-01-01")),
            item("second", Some("2023-01-01")),
            item("third", Some("2023-01-01")),
        ];
        sort_by_published(&mut items);
        let order: Vec<&str> = items.iter().map(|i| i.slug.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn undated_items_sort_last_in_input_order() {
        let mut items = vec![
            item("no-date-1", None),
            item("dated", Some("2020-01-01")),
            item("no-date-2", None),
        ];
        sort_by_published(&mut items);
        let order: Vec<&str> = items.iter().map(|i| i.slug.as_str()).collect();
        assert_eq!(order, vec!["dated", "no-date-1", "no-date-2"]);
    }

    #[test]
    fn sorting_twice_is_idempotent() {
        let mut items = vec![
            item("a", Some("2023-01-01")),
            item("b", Some("2022-01-01")),
            item("c", None),
        ];
        sort_by_published(&mut items);
        let once: Vec<String> = items.iter().map(|i| i.slug.clone()).collect();
        sort_by_published(&mut items);
        let twice: Vec<String> = items.iter().map(|i| i.slug.clone()).collect();
        assert_eq!(once, twice);
    }

    // =========================================================================
    // PageQuery tests
    // =========================================================================

    #[test]
    fn query_defaults_when_absent() {
        let q = PageQuery::from_params(None, None, 4);
        assert_eq!(q, PageQuery { page: 1, limit: 4 });
    }

    #[test]
    fn query_parses_valid_params() {
        let q = PageQuery::from_params(Some("3"), Some("10"), 4);
        assert_eq!(q, PageQuery { page: 3, limit: 10 });
    }

    #[test]
    fn query_malformed_falls_back() {
        let q = PageQuery::from_params(Some("abc"), Some("-2"), 4);
        assert_eq!(q, PageQuery { page: 1, limit: 4 });
    }

    #[test]
    fn query_zero_falls_back() {
        let q = PageQuery::from_params(Some("0"), Some("0"), 4);
        assert_eq!(q, PageQuery { page: 1, limit: 4 });
    }

    #[test]
    fn query_offset_arithmetic() {
        assert_eq!(PageQuery { page: 1, limit: 4 }.offset(), 0);
        assert_eq!(PageQuery { page: 3, limit: 4 }.offset(), 8);
    }

    // =========================================================================
    // paginate() tests
    // =========================================================================

    fn five_posts() -> Vec<ContentItem> {
        let mut items = vec![
            item("p1", Some("2023-01-01")),
            item("p2", Some("2023-02-01")),
            item("p3", Some("2023-03-01")),
            item("p4", Some("2023-04-01")),
            item("p5", Some("2023-05-01")),
        ];
        sort_by_published(&mut items);
        items
    }

    #[test]
    fn five_posts_page_one_has_four_most_recent() {
        let items = five_posts();
        let page = paginate(&items, &PageQuery { page: 1, limit: 4 });
        let order: Vec<&str> = page.items.iter().map(|i| i.slug.as_str()).collect();
        assert_eq!(order, vec!["p5", "p4", "p3", "p2"]);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn five_posts_page_two_has_remainder() {
        let items = five_posts();
        let page = paginate(&items, &PageQuery { page: 2, limit: 4 });
        let order: Vec<&str> = page.items.iter().map(|i| i.slug.as_str()).collect();
        assert_eq!(order, vec!["p1"]);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn page_past_end_is_empty_not_error() {
        let items = five_posts();
        let page = paginate(&items, &PageQuery { page: 3, limit: 4 });
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn empty_listing_has_zero_pages() {
        let page = paginate(&[], &PageQuery { page: 1, limit: 4 });
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn page_length_bounded_by_limit() {
        let items = five_posts();
        for page_num in 1..=4 {
            for limit in 1..=6 {
                let query = PageQuery {
                    page: page_num,
                    limit,
                };
                let page = paginate(&items, &query);
                assert!(page.items.len() <= limit);
                assert!(query.offset() + page.items.len() <= items.len());
            }
        }
    }

    #[test]
    fn exact_multiple_has_no_phantom_page() {
        let items = five_posts();
        let page = paginate(&items[..4], &PageQuery { page: 1, limit: 4 });
        assert_eq!(page.total_pages, 1);
    }
}
