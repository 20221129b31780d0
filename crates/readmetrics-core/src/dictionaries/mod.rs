//! Dictionaries for text analysis.
//!
//! Provides curated word tables used by syllable estimation.

pub mod syllable_exceptions;
