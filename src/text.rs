//! Reading-time estimation for content bodies.
//!
//! Post front matter declares a `readTime` in minutes. The `check` command
//! recomputes an estimate from the markdown body so drifted declarations can
//! be flagged — authors routinely edit a post without touching the number.
//!
//! Word counting goes through the markdown parser rather than raw text so
//! that markup (link URLs, emphasis markers, HTML tags) doesn't inflate the
//! count. Code blocks count too; readers do read them.

use pulldown_cmark::{Event, Parser};

/// Words per minute assumed for reading-time estimates.
pub const WORDS_PER_MINUTE: usize = 200;

/// Count words in a markdown body.
///
/// Only text and code events contribute; markup syntax is skipped.
pub fn word_count(markdown: &str) -> usize {
    Parser::new(markdown)
        .filter_map(|event| match event {
            Event::Text(text) | Event::Code(text) => Some(text.split_whitespace().count()),
            _ => None,
        })
        .sum()
}

/// Reading time in whole minutes, rounded up. Zero words reads in zero minutes.
pub fn reading_time(words: usize) -> usize {
    words.div_ceil(WORDS_PER_MINUTE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_plain_words() {
        assert_eq!(word_count("one two three"), 3);
    }

    #[test]
    fn markup_does_not_inflate_count() {
        assert_eq!(word_count("**bold** and [a link](https://example.com/very/long/url)"), 4);
    }

    #[test]
    fn code_blocks_count() {
        let md = "intro\n\n```rust\nlet x = 1;\n```\n";
        assert_eq!(word_count(md), 5);
    }

    #[test]
    fn empty_body_is_zero() {
        assert_eq!(word_count(""), 0);
        assert_eq!(reading_time(0), 0);
    }

    #[test]
    fn reading_time_rounds_up() {
        assert_eq!(reading_time(1), 1);
        assert_eq!(reading_time(200), 1);
        assert_eq!(reading_time(201), 2);
        assert_eq!(reading_time(1000), 5);
    }
}
