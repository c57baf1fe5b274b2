//! Text normalization and tokenization.
//!
//! All raw text that must become comparable tokens (document text, anchor
//! text, table-cell text) goes through the same pipeline: lowercase, collapse
//! runs of non-word characters into a single space, split on whitespace.

use std::sync::LazyLock;

use regex::Regex;

/// Matches runs of non-word characters (anything but letters, digits, underscore).
#[allow(clippy::expect_used)]
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").expect("NON_WORD regex"));

/// Lowercase `text` and replace every run of non-word characters with a
/// single space.
#[must_use]
pub fn normalize(text: &str) -> String {
    NON_WORD.replace_all(&text.to_lowercase(), " ").into_owned()
}

/// Normalize `text` and split it into word tokens, dropping empties.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_becomes_separator_and_underscore_survives() {
        assert_eq!(
            tokenize("Hello, World!  Foo_Bar"),
            vec!["hello", "world", "foo_bar"]
        );
    }

    #[test]
    fn tokenize_yields_nothing_for_degenerate_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t\n").is_empty());
        assert!(tokenize("!!! ... ---").is_empty());
    }

    #[test]
    fn tokenize_splits_on_inner_punctuation() {
        assert_eq!(tokenize("v1.2 beta-3"), vec!["v1", "2", "beta", "3"]);
    }

    #[test]
    fn normalize_collapses_runs_to_one_space() {
        assert_eq!(normalize("a--b!!c"), "a b c");
    }

    #[test]
    fn tokenize_keeps_non_ascii_letters() {
        assert_eq!(tokenize("Café au lait"), vec!["café", "au", "lait"]);
    }
}
