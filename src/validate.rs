//! Required-field validation for content metadata.
//!
//! Each category carries a contract: the set of front matter fields an item
//! must have to be listable (posts need `title`, `summary`, `publishedAt`,
//! `readTime`; snippets need `title`, `snippetCount`, `subtitle`, `image`).
//!
//! Presence is the test, not truthiness — `readTime = 0` and `summary = ""`
//! both satisfy the contract. An invalid item is excluded from listings;
//! it never fails a build.

use crate::loader::ContentRecord;
use tracing::warn;

/// Check a record against a required-field contract.
///
/// Returns the missing field names on failure, in contract order. Pure
/// apart from a diagnostic log line naming the item and what it lacks.
pub fn validate(record: &ContentRecord, required: &[String], slug: &str) -> Result<(), Vec<String>> {
    let missing: Vec<String> = required
        .iter()
        .filter(|field| !record.contains(field))
        .cloned()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        warn!(slug, missing = ?missing, "item missing required fields");
        Err(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_document;

    fn contract(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn complete_record_passes() {
        let record = parse_document(
            "+++\ntitle = \"t\"\nsummary = \"s\"\npublishedAt = \"2023-01-01\"\nreadTime = 5\n+++\n",
        )
        .unwrap();
        let required = contract(&["title", "summary", "publishedAt", "readTime"]);
        assert!(validate(&record, &required, "welcome").is_ok());
    }

    #[test]
    fn missing_fields_reported_in_contract_order() {
        let record = parse_document("+++\ntitle = \"t\"\n+++\n").unwrap();
        let required = contract(&["title", "summary", "publishedAt", "readTime"]);
        let missing = validate(&record, &required, "welcome").unwrap_err();
        assert_eq!(missing, vec!["summary", "publishedAt", "readTime"]);
    }

    #[test]
    fn falsy_values_count_as_present() {
        let record =
            parse_document("+++\ntitle = \"\"\nsnippetCount = 0\nsubtitle = \"\"\nimage = \"\"\n+++\n")
                .unwrap();
        let required = contract(&["title", "snippetCount", "subtitle", "image"]);
        assert!(validate(&record, &required, "use-debounce").is_ok());
    }

    #[test]
    fn empty_contract_always_passes() {
        let record = parse_document("+++\n+++\n").unwrap();
        assert!(validate(&record, &[], "anything").is_ok());
    }

    #[test]
    fn same_inputs_same_output() {
        let record = parse_document("+++\ntitle = \"t\"\n+++\n").unwrap();
        let required = contract(&["title", "summary"]);
        let first = validate(&record, &required, "x");
        let second = validate(&record, &required, "x");
        assert_eq!(first, second);
    }

    #[test]
    fn extra_fields_do_not_matter() {
        let record =
            parse_document("+++\ntitle = \"t\"\nextra = 1\nanother = true\n+++\n").unwrap();
        assert!(validate(&record, &contract(&["title"]), "x").is_ok());
    }
}
