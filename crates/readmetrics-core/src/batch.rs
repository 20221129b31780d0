//! Batch analysis of tagged text units.
//!
//! Each unit is analyzed independently, so units run in parallel on the
//! rayon pool. Output order matches input order one-to-one and no unit can
//! fail.

use rayon::prelude::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::readability::{self, Readability};
use crate::segment::Segmentation;

/// A text unit tagged with a caller-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextUnit<Id> {
    /// Caller's identifier, returned unchanged with the result.
    pub id: Id,
    /// Raw text to analyze.
    pub text: String,
}

impl<Id> TextUnit<Id> {
    /// Create a unit.
    pub fn new(id: Id, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// The result for one [`TextUnit`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedUnit<Id> {
    /// The identifier from the input unit.
    #[serde(flatten)]
    pub id: Id,
    /// The analysis result.
    pub readability: Readability,
}

/// Identifies one segment of one input source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct SegmentId {
    /// Where the text came from (usually a file path).
    pub source: String,
    /// 1-based position of the segment within its source.
    pub segment: usize,
}

impl std::fmt::Display for SegmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.source, self.segment)
    }
}

/// Analyze every unit, preserving order.
#[tracing::instrument(skip_all, fields(units = units.len()))]
pub fn analyze_batch<Id: Send>(units: Vec<TextUnit<Id>>) -> Vec<AnalyzedUnit<Id>> {
    let results: Vec<_> = units
        .into_par_iter()
        .map(|unit| AnalyzedUnit {
            readability: readability::analyze(&unit.text),
            id: unit.id,
        })
        .collect();
    tracing::debug!(results = results.len(), "batch complete");
    results
}

/// Split a source document into tagged units.
///
/// Always yields at least one unit: a document with no non-blank segments
/// becomes a single empty unit, so every source gets a result.
pub fn segment_units(
    source: &str,
    text: &str,
    segmentation: Segmentation,
) -> Vec<TextUnit<SegmentId>> {
    let mut segments = segmentation.split(text);
    if segments.is_empty() {
        segments.push("");
    }

    segments
        .into_iter()
        .enumerate()
        .map(|(i, segment)| {
            TextUnit::new(
                SegmentId {
                    source: source.to_string(),
                    segment: i + 1,
                },
                segment,
            )
        })
        .collect()
}
