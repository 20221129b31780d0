//! Letter, sentence and word counts over canonical text.
//!
//! Sentence and word counts are floored at 1 so the score formulas never
//! divide by zero. The floor is silent.

/// Count ASCII letters (`A-Z`, `a-z`).
pub fn letter_count(text: &str) -> usize {
    text.chars().filter(char::is_ascii_alphabetic).count()
}

/// Count `.` terminators, minimum 1.
pub fn sentence_count(text: &str) -> usize {
    text.matches('.').count().max(1)
}

/// Count space-separated tokens: one more than the number of spaces.
///
/// Canonical text has single spaces only, so this is the token count. An
/// input with no spaces at all is one word.
pub fn word_count(text: &str) -> usize {
    text.matches(' ').count() + 1
}
