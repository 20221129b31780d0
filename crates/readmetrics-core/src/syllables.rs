//! Syllable estimation.
//!
//! English syllabification has no closed form, so this is a heuristic:
//!
//! 1. Clean the word to lowercase `[a-z]`.
//! 2. Return the pinned count for words in the exception table.
//! 3. Strip single-syllable prefixes and suffixes, one syllable each.
//! 4. Count vowel groups (`a e i o u y`) in what remains.
//! 5. Subtract one for every over-counted cluster pattern that matches.
//! 6. Add one for every under-counted cluster pattern that matches.
//! 7. Clamp to at least one.
//!
//! Every rule list is ordered. Prefix/suffix stripping feeds each rule the
//! word left by the previous one, and the cluster patterns are matched
//! against the stripped word, so the lists must not be reordered.

use std::sync::LazyLock;

use regex::Regex;

use crate::dictionaries::syllable_exceptions;

/// Single-syllable prefixes and suffixes, stripped in this order.
const PREFIX_SUFFIX_RULES: &[&str] = &["^un", "^fore", "ly$", "less$", "ful$", "ers?$", "ings?$"];

/// Clusters counted as two vowel groups that are spoken as one syllable.
const SUBTRACT_RULES: &[&str] = &[
    "cia(l|$)", // glacial, acacia
    "tia",
    "cius",
    "cious",
    "[^aeiou]giu",
    "[aeiouy][^aeiouy]ion",
    "iou",
    "sia$",
    "eous$",
    "[oa]gue$",
    ".[^aeiuoycgltdb]{2,}ed$",
    ".ely$",
    "^jua",
    "uai",
    "eau",
    "[aeiouy](b|c|ch|d|dg|f|g|gh|gn|k|l|ll|lv|m|mm|n|nc|ng|nn|p|r|rc|rn|rs|rv|s|sc|sk|sl|squ|ss|st|t|th|v|y|z)e$",
    "[aeiouy](b|c|ch|dg|f|g|gh|gn|k|l|lch|ll|lv|m|mm|n|nc|ng|nch|nn|p|r|rc|rn|rs|rv|s|sc|sk|sl|squ|ss|th|v|y|z)ed$",
    "[aeiouy](b|ch|d|f|gh|gn|k|l|lch|ll|lv|m|mm|n|nch|nn|p|r|rn|rs|rv|s|sc|sk|sl|squ|ss|st|t|th|v|y)es$",
    "^busi$",
];

/// A doubled consonant before a final `l`. The regex crate has no
/// backreferences, so the pairs are spelled out.
const DOUBLED_CONSONANT_L: &str =
    "(bb|cc|dd|ff|gg|hh|jj|kk|ll|mm|nn|pp|qq|rr|ss|tt|vv|ww|xx|zz)l$";

/// Clusters counted as one vowel group that are spoken as two syllables.
const ADD_RULES: &[&str] = &[
    "ia",
    "riet",
    "dien",
    "iu",
    "io",
    "ii",
    "[aeiouym]bl$",
    "[aeiou]{3}",
    "^mc",
    "ism$",
    DOUBLED_CONSONANT_L,
    "[^l]lien",
    "^coa[dglx].",
    "[^gq]ua[^auieo]",
    "dnt$",
    "uity$",
    "ie(r|st)$",
];

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("valid regex"))
        .collect()
}

static PREFIX_SUFFIX: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(PREFIX_SUFFIX_RULES));
static SUBTRACT: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(SUBTRACT_RULES));
static ADD: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(ADD_RULES));

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Lowercase a word and keep only ASCII letters.
pub fn clean_word(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// Estimate the syllable count of a single word.
///
/// Always returns at least 1, including for words with no vowels and for
/// tokens that clean to nothing (numerals, stray punctuation).
///
/// # Examples
///
/// ```
/// use readmetrics_core::syllables::count_syllables;
///
/// assert_eq!(count_syllables("forever"), 3);
/// assert_eq!(count_syllables("Readability"), 5);
/// assert_eq!(count_syllables("rhythm"), 1);
/// ```
pub fn count_syllables(word: &str) -> usize {
    let mut word = clean_word(word);

    if let Some(count) = syllable_exceptions::lookup(&word) {
        return count;
    }

    let mut affixes = 0usize;
    for rule in PREFIX_SUFFIX.iter() {
        if rule.is_match(&word) {
            word = rule.replace(&word, "").into_owned();
            affixes += 1;
        }
    }

    let vowel_groups = word
        .split(|c: char| !VOWELS.contains(&c))
        .filter(|part| !part.is_empty())
        .count();

    let subtract = SUBTRACT.iter().filter(|rule| rule.is_match(&word)).count();
    let add = ADD.iter().filter(|rule| rule.is_match(&word)).count();

    (vowel_groups + affixes + add).saturating_sub(subtract).max(1)
}

/// Syllable aggregates over every token of a canonical text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyllableSummary {
    /// Sum of syllable estimates over all tokens.
    pub total: usize,
    /// Tokens estimated at three or more syllables.
    pub three_or_more: usize,
    /// Like `three_or_more`, but skipping tokens that start with an ASCII
    /// uppercase letter (a stand-in for proper nouns).
    pub three_or_more_excluding_capitalized: usize,
}

/// Apply [`count_syllables`] to every space-separated token.
///
/// Capitalization is checked on the raw token, before cleaning.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze_syllables(text: &str) -> SyllableSummary {
    text.split(' ').fold(SyllableSummary::default(), |mut summary, token| {
        let count = count_syllables(token);
        summary.total += count;
        if count > 2 {
            summary.three_or_more += 1;
            if !token.starts_with(|c: char| c.is_ascii_uppercase()) {
                summary.three_or_more_excluding_capitalized += 1;
            }
        }
        summary
    })
}
