//! Reading and speaking time estimates.

#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]

/// Average silent reading speed, words per minute.
pub const READING_WPM: f64 = 225.0;

/// Average speaking speed, words per minute.
pub const SPEAKING_WPM: f64 = 125.0;

const SECONDS_PER_MINUTE: f64 = 60.0;

fn seconds_at(words: usize, words_per_minute: f64) -> u64 {
    (SECONDS_PER_MINUTE / words_per_minute * words as f64).round() as u64
}

/// Estimated silent reading time in whole seconds.
pub fn reading_time_seconds(words: usize) -> u64 {
    seconds_at(words, READING_WPM)
}

/// Estimated read-aloud time in whole seconds.
pub fn speaking_time_seconds(words: usize) -> u64 {
    seconds_at(words, SPEAKING_WPM)
}
