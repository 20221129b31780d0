//! Core library for readmetrics.
//!
//! Computes letter, word, sentence and syllable counts for a block of text,
//! and from them the classic readability formulas (Flesch-Kincaid Reading
//! Ease and Grade Level, Gunning-Fog, Coleman-Liau, SMOG, Automated
//! Readability Index) plus reading and speaking time estimates.
//!
//! # Modules
//!
//! - [`normalize`] - Canonical text: markup stripped, terminators unified
//! - [`counters`] - Letter, sentence and word counts
//! - [`syllables`] - Heuristic syllable estimation
//! - [`scores`] - Readability formulas
//! - [`timing`] - Reading and speaking time
//! - [`readability`] - Per-text analysis and result types
//! - [`batch`] - Tagged, order-preserving batch analysis
//! - [`segment`] - Splitting documents into units
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use readmetrics_core::analyze;
//!
//! let result = analyze("<p>The cat sat on the mat.</p>");
//! let scores = result.scores().expect("text has letters");
//! println!("Grade level: {}", scores.flesch_kincaid_grade_level);
//! ```
#![deny(unsafe_code)]

pub mod batch;
pub mod config;
pub mod counters;
pub mod dictionaries;
pub mod error;
pub mod normalize;
pub mod readability;
pub mod scores;
pub mod segment;
pub mod syllables;
pub mod timing;

pub use batch::{AnalyzedUnit, SegmentId, TextUnit, analyze_batch};
pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{ConfigError, ConfigResult};
pub use readability::{Readability, ReadabilityRecord, ReadabilityScores, TextStatistics, analyze};
pub use segment::Segmentation;
