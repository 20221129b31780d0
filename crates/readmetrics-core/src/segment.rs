//! Splitting a document into the text units that get scored.

use serde::{Deserialize, Serialize};

/// How a document is divided before analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Segmentation {
    /// The whole document is one unit.
    #[default]
    Whole,
    /// Paragraphs separated by blank lines.
    Paragraphs,
    /// Individual lines.
    Lines,
}

impl Segmentation {
    /// Returns the mode name as used in config files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Whole => "whole",
            Self::Paragraphs => "paragraphs",
            Self::Lines => "lines",
        }
    }

    /// Split `text` into units.
    ///
    /// `Whole` always returns exactly one unit, even for empty text, so every
    /// document produces at least one result. The other modes drop blank
    /// units.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self {
            Self::Whole => vec![text],
            Self::Paragraphs => split_paragraphs(text),
            Self::Lines => text.lines().map(str::trim).filter(|l| !l.is_empty()).collect(),
        }
    }
}

impl std::fmt::Display for Segmentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split text into paragraphs separated by one or more blank lines.
///
/// Lines holding only whitespace count as blank, and `\r\n` line endings
/// are handled.
fn split_paragraphs(text: &str) -> Vec<&str> {
    let mut paragraphs = Vec::new();
    let mut start: Option<usize> = None;
    let mut end = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        if line.trim().is_empty() {
            if let Some(s) = start.take() {
                paragraphs.push(text[s..end].trim());
            }
        } else {
            start.get_or_insert(offset);
            end = offset + line.len();
        }
        offset += line.len();
    }
    if let Some(s) = start {
        paragraphs.push(text[s..end].trim());
    }

    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_keeps_everything() {
        assert_eq!(Segmentation::Whole.split("a\n\nb"), vec!["a\n\nb"]);
        assert_eq!(Segmentation::Whole.split(""), vec![""]);
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let text = "First paragraph.\nStill first.\n\nSecond paragraph.\n\n\n\nThird.";
        assert_eq!(
            Segmentation::Paragraphs.split(text),
            vec!["First paragraph.\nStill first.", "Second paragraph.", "Third."]
        );
    }

    #[test]
    fn paragraphs_handle_crlf_and_whitespace_lines() {
        let text = "One.\r\n   \r\nTwo.\r\n";
        assert_eq!(Segmentation::Paragraphs.split(text), vec!["One.", "Two."]);
    }

    #[test]
    fn paragraphs_of_blank_text_is_empty() {
        assert!(Segmentation::Paragraphs.split("\n \n\t\n").is_empty());
    }

    #[test]
    fn lines_drop_blanks() {
        assert_eq!(
            Segmentation::Lines.split("one\n\n  two  \nthree"),
            vec!["one", "two", "three"]
        );
    }

    #[test]
    fn as_str_round_trips_through_serde() {
        for mode in [
            Segmentation::Whole,
            Segmentation::Paragraphs,
            Segmentation::Lines,
        ] {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.as_str()));
        }
    }
}
