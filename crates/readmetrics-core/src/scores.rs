//! Readability formulas.
//!
//! Each formula is a closed-form expression over the lexical aggregates,
//! rounded to one decimal place. Callers guarantee `words >= 1` and
//! `sentences >= 1`.
//!
//! | Formula                      | Expression                                                   |
//! |------------------------------|--------------------------------------------------------------|
//! | Flesch-Kincaid Reading Ease  | `206.835 - 1.015 * wps - 84.6 * spw`                         |
//! | Flesch-Kincaid Grade Level   | `0.39 * wps + 11.8 * spw - 15.59`                            |
//! | Gunning-Fog                  | `0.4 * (wps + 100 * complex_fraction)`                       |
//! | Coleman-Liau                 | `5.89 * letters/words - 0.3 * sentences/words - 15.8`        |
//! | SMOG                         | `1.043 * sqrt(complex * 30/sentences + 3.1291)`              |
//! | Automated Readability Index  | `4.71 * letters/words + 0.5 * words/sentences - 21.43`       |
//!
//! The expressions are evaluated term by term without fused multiply-add so
//! results at the rounding boundary stay reproducible.

#![allow(clippy::suboptimal_flops, clippy::cast_precision_loss)]

/// Round to one decimal place, halves away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Flesch-Kincaid Reading Ease. Higher is easier.
pub fn flesch_kincaid_reading_ease(words_per_sentence: f64, syllables_per_word: f64) -> f64 {
    round_to_tenth(206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word)
}

/// Flesch-Kincaid Grade Level (US school grade).
pub fn flesch_kincaid_grade_level(words_per_sentence: f64, syllables_per_word: f64) -> f64 {
    round_to_tenth(0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59)
}

/// Gunning-Fog score.
///
/// `complex_fraction` is the share (0..=1) of words with three or more
/// syllables, not counting capitalized words.
pub fn gunning_fog_score(words_per_sentence: f64, complex_fraction: f64) -> f64 {
    round_to_tenth((words_per_sentence + complex_fraction * 100.0) * 0.4)
}

/// Coleman-Liau index.
pub fn coleman_liau_index(letters: usize, words: usize, sentences: usize) -> f64 {
    let words = words as f64;
    round_to_tenth(5.89 * (letters as f64 / words) - 0.3 * (sentences as f64 / words) - 15.8)
}

/// SMOG index, from the count of words with three or more syllables.
pub fn smog_index(complex_words: usize, sentences: usize) -> f64 {
    round_to_tenth(1.043 * (complex_words as f64 * (30.0 / sentences as f64) + 3.1291).sqrt())
}

/// Automated Readability Index.
pub fn automated_readability_index(letters: usize, words: usize, sentences: usize) -> f64 {
    let words = words as f64;
    round_to_tenth(4.71 * (letters as f64 / words) + 0.5 * (words / sentences as f64) - 21.43)
}
