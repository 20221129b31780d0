//! Text normalization.
//!
//! Turns arbitrary, possibly marked-up input into canonical text: markup
//! removed, every sentence terminated by a single `.`, whitespace collapsed
//! to single spaces and a trailing terminator present.
//!
//! The steps run in a fixed order. Later steps depend on the shape produced
//! by earlier ones, so reordering them changes every downstream count.
//!
//! Markup handling is a regex pass, not an HTML parser. Malformed or nested
//! tags may leave stray characters behind; those flow through to the counters
//! unchanged.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Block-level tags whose closing tag ends a sentence.
pub const FULL_STOP_TAGS: &[&str] = &["li", "p", "h1", "h2", "h3", "h4", "h5", "h6", "dd"];

/// One case-insensitive matcher per closing tag in [`FULL_STOP_TAGS`].
static CLOSING_TAG_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    FULL_STOP_TAGS
        .iter()
        .map(|tag| Regex::new(&format!("(?i)</{tag}>")).expect("valid regex"))
        .collect()
});

/// Any remaining `<...>` span.
static MARKUP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

/// Quotes, commas, colons, semicolons, parentheses and hyphens.
static SEPARATOR_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[",:;()\-]"#).expect("valid regex"));

static TERMINATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]").expect("valid regex"));

static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// A period followed by more periods and/or spaces.
static DUPLICATE_TERMINATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[. ]+").expect("valid regex"));

static PADDED_TERMINATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" *\.").expect("valid regex"));

/// The first word after a terminator, including the terminator and space.
static SENTENCE_OPENER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\. [^ ]+").expect("valid regex"));

/// Normalize raw text into its canonical form.
///
/// Never fails. Empty or markup-only input yields `"."`.
///
/// # Examples
///
/// ```
/// use readmetrics_core::normalize::normalize;
///
/// assert_eq!(normalize("Hello world!  How are you?"), "Hello world. how are you.");
/// assert_eq!(normalize(""), ".");
/// ```
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn normalize(text: &str) -> String {
    let mut text = text.to_string();

    for pattern in CLOSING_TAG_PATTERNS.iter() {
        text = pattern.replace_all(&text, ".").into_owned();
    }

    let text = MARKUP_PATTERN.replace_all(&text, "");
    let text = SEPARATOR_PUNCTUATION.replace_all(&text, " ");
    let text = TERMINATORS.replace_all(&text, ".");
    let text = format!("{}.", text.trim());
    let text = WHITESPACE_RUNS.replace_all(&text, " ");
    let text = DUPLICATE_TERMINATORS.replace_all(&text, ".");
    let text = PADDED_TERMINATOR.replace_all(&text, ". ");
    let text = text.trim_end();

    SENTENCE_OPENER
        .replace_all(text, |caps: &Captures<'_>| caps[0].to_lowercase())
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_becomes_single_terminator() {
        assert_eq!(normalize(""), ".");
        assert_eq!(normalize("   \n\t "), ".");
    }

    #[test]
    fn plain_sentence_is_unchanged() {
        assert_eq!(normalize("The cat sat on the mat."), "The cat sat on the mat.");
    }

    #[test]
    fn missing_terminator_is_added() {
        assert_eq!(normalize("no full stop here"), "no full stop here.");
    }

    #[test]
    fn terminators_unified_and_collapsed() {
        assert_eq!(
            normalize("Hello   world!!! How are you?  Fine, thanks; (really) - \"yes\"."),
            "Hello world. how are you. fine thanks really yes."
        );
    }

    #[test]
    fn closing_block_tags_end_sentences() {
        assert_eq!(normalize("<p>Hello</p><p>World</p>"), "Hello. world.");
    }

    #[test]
    fn closing_tags_match_case_insensitively() {
        assert_eq!(normalize("<P>One</P><LI>Two</LI>"), "One. two.");
    }

    #[test]
    fn inline_tags_are_stripped_without_breaks() {
        assert_eq!(
            normalize("<h1>Title</h1><div>Some <b>bold</b> text</div><li>Item one</li>"),
            "Title. some bold textItem one."
        );
    }

    #[test]
    fn markup_only_input() {
        assert_eq!(normalize("<div><span></span></div>"), ".");
        assert_eq!(normalize("<p></p>"), ".");
    }

    #[test]
    fn newlines_become_spaces() {
        assert_eq!(normalize("line one\nline two\r\n"), "line one line two.");
    }

    #[test]
    fn ellipsis_collapses_to_one_terminator() {
        assert_eq!(normalize("Wait... What?!"), "Wait. what.");
    }

    #[test]
    fn opener_lowercased_only_after_terminator() {
        assert_eq!(normalize("Alice met Bob. Carol left."), "Alice met Bob. carol left.");
    }

    #[test]
    fn already_canonical_text_is_fixed_point() {
        let once = normalize("First. Second! Third? <p>Fourth</p>");
        assert_eq!(normalize(&once), once);
    }
}
