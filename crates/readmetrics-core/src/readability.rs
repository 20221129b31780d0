//! Readability analysis of a single text unit.
//!
//! [`TextStatistics`] wraps the canonical text and computes each statistic
//! the first time it is asked for. [`analyze`] runs everything once and
//! returns a [`Readability`] value:
//!
//! - [`Readability::Computed`] with the full [`ReadabilityScores`], or
//! - [`Readability::Empty`] when the text has no letters, in which case no
//!   formula is evaluated.
//!
//! Rounding: scores to one decimal place, times to whole seconds, both
//! halves away from zero.

#![allow(clippy::cast_precision_loss)]

use std::cell::OnceCell;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::counters;
use crate::normalize::normalize;
use crate::scores;
use crate::syllables::{self, SyllableSummary};
use crate::timing;

/// Column names for tabular output, in row order.
pub const ROW_HEADER: [&str; 13] = [
    "LetterCount",
    "WordCount",
    "AverageSyllablesPerWord",
    "SentenceCount",
    "AverageWordsPerSentence",
    "ReadingTime",
    "SpeakingTime",
    "FleschKincaidReadingEase",
    "FleschKincaidGradeLevel",
    "GunningFogScore",
    "ColemanLiauIndex",
    "SMOGIndex",
    "AutomatedReadabilityIndex",
];

/// Lazily computed statistics for one canonical text.
///
/// Every accessor computes its value on first call and caches it. The cells
/// make this type `!Sync`: give each thread its own instance.
#[derive(Debug)]
pub struct TextStatistics {
    text: String,
    letters: OnceCell<usize>,
    sentences: OnceCell<usize>,
    words: OnceCell<usize>,
    syllables: OnceCell<SyllableSummary>,
}

impl TextStatistics {
    /// Normalize `raw` and wrap the result.
    pub fn parse(raw: &str) -> Self {
        Self::from_canonical(normalize(raw))
    }

    /// Wrap text that is already canonical.
    pub const fn from_canonical(text: String) -> Self {
        Self {
            text,
            letters: OnceCell::new(),
            sentences: OnceCell::new(),
            words: OnceCell::new(),
            syllables: OnceCell::new(),
        }
    }

    /// The canonical text.
    pub fn clean_text(&self) -> &str {
        &self.text
    }

    /// Number of ASCII letters.
    pub fn letter_count(&self) -> usize {
        *self.letters.get_or_init(|| counters::letter_count(&self.text))
    }

    /// Number of sentences, at least 1.
    pub fn sentence_count(&self) -> usize {
        *self
            .sentences
            .get_or_init(|| counters::sentence_count(&self.text))
    }

    /// Number of words, at least 1.
    pub fn word_count(&self) -> usize {
        *self.words.get_or_init(|| counters::word_count(&self.text))
    }

    /// Syllable aggregates over all words.
    pub fn syllables(&self) -> SyllableSummary {
        *self
            .syllables
            .get_or_init(|| syllables::analyze_syllables(&self.text))
    }

    /// Mean syllables per word.
    pub fn average_syllables_per_word(&self) -> f64 {
        self.syllables().total as f64 / self.word_count() as f64
    }

    /// Mean words per sentence.
    pub fn average_words_per_sentence(&self) -> f64 {
        self.word_count() as f64 / self.sentence_count() as f64
    }

    /// Share (0..=1) of words with three or more syllables, excluding
    /// capitalized words.
    pub fn percentage_words_with_three_syllables(&self) -> f64 {
        self.syllables().three_or_more_excluding_capitalized as f64 / self.word_count() as f64
    }

    /// See [`scores::flesch_kincaid_reading_ease`].
    pub fn flesch_kincaid_reading_ease(&self) -> f64 {
        scores::flesch_kincaid_reading_ease(
            self.average_words_per_sentence(),
            self.average_syllables_per_word(),
        )
    }

    /// See [`scores::flesch_kincaid_grade_level`].
    pub fn flesch_kincaid_grade_level(&self) -> f64 {
        scores::flesch_kincaid_grade_level(
            self.average_words_per_sentence(),
            self.average_syllables_per_word(),
        )
    }

    /// See [`scores::gunning_fog_score`].
    pub fn gunning_fog_score(&self) -> f64 {
        scores::gunning_fog_score(
            self.average_words_per_sentence(),
            self.percentage_words_with_three_syllables(),
        )
    }

    /// See [`scores::coleman_liau_index`].
    pub fn coleman_liau_index(&self) -> f64 {
        scores::coleman_liau_index(self.letter_count(), self.word_count(), self.sentence_count())
    }

    /// See [`scores::smog_index`].
    pub fn smog_index(&self) -> f64 {
        scores::smog_index(self.syllables().three_or_more, self.sentence_count())
    }

    /// See [`scores::automated_readability_index`].
    pub fn automated_readability_index(&self) -> f64 {
        scores::automated_readability_index(
            self.letter_count(),
            self.word_count(),
            self.sentence_count(),
        )
    }

    /// Estimated silent reading time in seconds.
    pub fn reading_time_seconds(&self) -> u64 {
        timing::reading_time_seconds(self.word_count())
    }

    /// Estimated speaking time in seconds.
    pub fn speaking_time_seconds(&self) -> u64 {
        timing::speaking_time_seconds(self.word_count())
    }

    /// Compute every field and produce the final result.
    pub fn into_readability(self) -> Readability {
        if self.letter_count() == 0 {
            return Readability::Empty {
                clean_text: self.text,
            };
        }

        Readability::Computed(ReadabilityScores {
            letter_count: self.letter_count(),
            word_count: self.word_count(),
            average_syllables_per_word: self.average_syllables_per_word(),
            sentence_count: self.sentence_count(),
            average_words_per_sentence: self.average_words_per_sentence(),
            reading_time_seconds: self.reading_time_seconds(),
            speaking_time_seconds: self.speaking_time_seconds(),
            flesch_kincaid_reading_ease: self.flesch_kincaid_reading_ease(),
            flesch_kincaid_grade_level: self.flesch_kincaid_grade_level(),
            gunning_fog_score: self.gunning_fog_score(),
            coleman_liau_index: self.coleman_liau_index(),
            smog_index: self.smog_index(),
            automated_readability_index: self.automated_readability_index(),
            clean_text: self.text,
        })
    }
}

/// All metrics for a text with at least one letter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityScores {
    /// ASCII letters in the canonical text.
    pub letter_count: usize,
    /// Space-separated tokens.
    pub word_count: usize,
    /// Mean syllables per word.
    pub average_syllables_per_word: f64,
    /// Sentence terminators.
    pub sentence_count: usize,
    /// Mean words per sentence.
    pub average_words_per_sentence: f64,
    /// Silent reading time at 225 words per minute.
    pub reading_time_seconds: u64,
    /// Speaking time at 125 words per minute.
    pub speaking_time_seconds: u64,
    /// Flesch-Kincaid Reading Ease.
    pub flesch_kincaid_reading_ease: f64,
    /// Flesch-Kincaid Grade Level.
    pub flesch_kincaid_grade_level: f64,
    /// Gunning-Fog score.
    pub gunning_fog_score: f64,
    /// Coleman-Liau index.
    pub coleman_liau_index: f64,
    /// SMOG index.
    pub smog_index: f64,
    /// Automated Readability Index.
    pub automated_readability_index: f64,
    /// The canonical text the metrics were computed from.
    pub clean_text: String,
}

/// Outcome of analyzing one text unit.
#[derive(Debug, Clone, PartialEq)]
pub enum Readability {
    /// The text had no letters; nothing was scored.
    Empty {
        /// The canonical text.
        clean_text: String,
    },
    /// The text was scored.
    Computed(ReadabilityScores),
}

impl Readability {
    /// The canonical text, for either variant.
    pub fn clean_text(&self) -> &str {
        match self {
            Self::Empty { clean_text } => clean_text,
            Self::Computed(scores) => &scores.clean_text,
        }
    }

    /// The scores, if the text was scored.
    pub const fn scores(&self) -> Option<&ReadabilityScores> {
        match self {
            Self::Empty { .. } => None,
            Self::Computed(scores) => Some(scores),
        }
    }

    /// Returns `true` for the no-letters case.
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    /// Render as a row of 13 cells matching [`ROW_HEADER`].
    ///
    /// Empty results render `0`, `0` and eleven blank cells.
    pub fn to_row(&self) -> [String; 13] {
        match self {
            Self::Empty { .. } => {
                let mut row: [String; 13] = Default::default();
                row[0] = "0".to_string();
                row[1] = "0".to_string();
                row
            }
            Self::Computed(s) => [
                s.letter_count.to_string(),
                s.word_count.to_string(),
                s.average_syllables_per_word.to_string(),
                s.sentence_count.to_string(),
                s.average_words_per_sentence.to_string(),
                s.reading_time_seconds.to_string(),
                s.speaking_time_seconds.to_string(),
                s.flesch_kincaid_reading_ease.to_string(),
                s.flesch_kincaid_grade_level.to_string(),
                s.gunning_fog_score.to_string(),
                s.coleman_liau_index.to_string(),
                s.smog_index.to_string(),
                s.automated_readability_index.to_string(),
            ],
        }
    }
}

impl Serialize for Readability {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ReadabilityRecord::from(self).serialize(serializer)
    }
}

/// Flat serialized shape of a [`Readability`].
///
/// Empty results carry `letter_count = 0`, `word_count = 0` and `null` for
/// every other metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityRecord {
    /// ASCII letters in the canonical text.
    pub letter_count: usize,
    /// Space-separated tokens (0 for empty results).
    pub word_count: usize,
    /// Mean syllables per word.
    pub average_syllables_per_word: Option<f64>,
    /// Sentence terminators.
    pub sentence_count: Option<usize>,
    /// Mean words per sentence.
    pub average_words_per_sentence: Option<f64>,
    /// Silent reading time in seconds.
    pub reading_time_seconds: Option<u64>,
    /// Speaking time in seconds.
    pub speaking_time_seconds: Option<u64>,
    /// Flesch-Kincaid Reading Ease.
    pub flesch_kincaid_reading_ease: Option<f64>,
    /// Flesch-Kincaid Grade Level.
    pub flesch_kincaid_grade_level: Option<f64>,
    /// Gunning-Fog score.
    pub gunning_fog_score: Option<f64>,
    /// Coleman-Liau index.
    pub coleman_liau_index: Option<f64>,
    /// SMOG index.
    pub smog_index: Option<f64>,
    /// Automated Readability Index.
    pub automated_readability_index: Option<f64>,
    /// The canonical text.
    pub clean_text: String,
}

impl From<&Readability> for ReadabilityRecord {
    fn from(readability: &Readability) -> Self {
        match readability {
            Readability::Empty { clean_text } => Self {
                letter_count: 0,
                word_count: 0,
                average_syllables_per_word: None,
                sentence_count: None,
                average_words_per_sentence: None,
                reading_time_seconds: None,
                speaking_time_seconds: None,
                flesch_kincaid_reading_ease: None,
                flesch_kincaid_grade_level: None,
                gunning_fog_score: None,
                coleman_liau_index: None,
                smog_index: None,
                automated_readability_index: None,
                clean_text: clean_text.clone(),
            },
            Readability::Computed(s) => Self {
                letter_count: s.letter_count,
                word_count: s.word_count,
                average_syllables_per_word: Some(s.average_syllables_per_word),
                sentence_count: Some(s.sentence_count),
                average_words_per_sentence: Some(s.average_words_per_sentence),
                reading_time_seconds: Some(s.reading_time_seconds),
                speaking_time_seconds: Some(s.speaking_time_seconds),
                flesch_kincaid_reading_ease: Some(s.flesch_kincaid_reading_ease),
                flesch_kincaid_grade_level: Some(s.flesch_kincaid_grade_level),
                gunning_fog_score: Some(s.gunning_fog_score),
                coleman_liau_index: Some(s.coleman_liau_index),
                smog_index: Some(s.smog_index),
                automated_readability_index: Some(s.automated_readability_index),
                clean_text: s.clean_text.clone(),
            },
        }
    }
}

/// Analyze one text unit from scratch.
///
/// Never fails. Text with no ASCII letters yields [`Readability::Empty`].
///
/// # Examples
///
/// ```
/// use readmetrics_core::readability::analyze;
///
/// let result = analyze("The cat sat on the mat.");
/// let scores = result.scores().expect("text has letters");
/// assert_eq!(scores.word_count, 6);
/// assert_eq!(scores.flesch_kincaid_reading_ease, 116.1);
/// ```
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze(text: &str) -> Readability {
    let stats = TextStatistics::parse(text);
    tracing::debug!(
        letters = stats.letter_count(),
        words = stats.word_count(),
        sentences = stats.sentence_count(),
        "text statistics"
    );
    stats.into_readability()
}
