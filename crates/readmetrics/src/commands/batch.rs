//! Batch command: one row per file segment.

use std::io::Write;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, instrument};

use readmetrics_core::Segmentation;
use readmetrics_core::batch::{self, AnalyzedUnit, SegmentId, TextUnit};
use readmetrics_core::readability::ROW_HEADER;

use super::read_input_file;

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Files to analyze, in output order.
    #[arg(required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// How to split each file before scoring (overrides config).
    #[arg(long, value_enum)]
    pub segment: Option<Segmentation>,

    /// Omit the header row from tab-separated output.
    #[arg(long)]
    pub no_header: bool,
}

/// Score every segment of every file and print one row per segment.
#[instrument(name = "cmd_batch", skip_all, fields(files = args.files.len()))]
pub fn cmd_batch(
    args: BatchArgs,
    global_json: bool,
    quiet: bool,
    config_segment: Segmentation,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let segmentation = args.segment.unwrap_or(config_segment);
    debug!(files = args.files.len(), segment = %segmentation, "executing batch command");

    let progress = if quiet || global_json {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(args.files.len() as u64)
    };
    progress.set_style(
        ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
            .context("invalid progress template")?
            .progress_chars("=> "),
    );

    let mut units: Vec<TextUnit<SegmentId>> = Vec::new();
    for file in &args.files {
        progress.set_message(file.to_string());
        let content = read_input_file(file, max_input_bytes)?;
        units.extend(batch::segment_units(file.as_str(), &content, segmentation));
        progress.inc(1);
    }
    progress.finish_and_clear();

    let results = batch::analyze_batch(units);
    debug!(rows = results.len(), "batch analyzed");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if global_json {
        serde_json::to_writer_pretty(&mut out, &results)?;
        writeln!(out)?;
    } else {
        write_rows(&mut out, &results, !args.no_header)?;
    }

    Ok(())
}

/// Write tab-separated rows: source, segment, then the metric columns.
fn write_rows<W: Write>(
    out: &mut W,
    results: &[AnalyzedUnit<SegmentId>],
    header: bool,
) -> std::io::Result<()> {
    if header {
        writeln!(out, "Source\tSegment\t{}", ROW_HEADER.join("\t"))?;
    }
    for unit in results {
        let source = unit.id.source.replace(['\t', '\n'], " ");
        writeln!(
            out,
            "{source}\t{}\t{}",
            unit.id.segment,
            unit.readability.to_row().join("\t")
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(results: &[AnalyzedUnit<SegmentId>], header: bool) -> String {
        let mut buf = Vec::new();
        write_rows(&mut buf, results, header).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_then_one_row_per_unit() {
        let mut units =
            batch::segment_units("a.txt", "The cat sat on the mat.", Segmentation::Whole);
        units.extend(batch::segment_units("b.txt", "123", Segmentation::Whole));
        let text = render(&batch::analyze_batch(units), true);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Source\tSegment\tLetterCount\tWordCount"));
        assert!(lines[1].starts_with("a.txt\t1\t17\t6\t1\t1\t6\t2\t3\t116.1"));
        assert_eq!(lines[2], "b.txt\t1\t0\t0\t\t\t\t\t\t\t\t\t\t\t");
    }

    #[test]
    fn header_can_be_omitted() {
        let units = batch::segment_units("a.txt", "Hi.", Segmentation::Whole);
        let text = render(&batch::analyze_batch(units), false);
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("a.txt\t1\t"));
    }

    #[test]
    fn blank_file_still_gets_a_row() {
        let mut units = batch::segment_units("a.txt", "Hi.\n\nThere.", Segmentation::Paragraphs);
        units.extend(batch::segment_units("blank.txt", "\n  \n", Segmentation::Paragraphs));
        let text = render(&batch::analyze_batch(units), false);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "blank.txt\t1\t0\t0\t\t\t\t\t\t\t\t\t\t\t");
    }

    #[test]
    fn tabs_in_source_names_are_replaced() {
        let units = batch::segment_units("odd\tname", "Hi.", Segmentation::Whole);
        let text = render(&batch::analyze_batch(units), false);
        assert!(text.starts_with("odd name\t1\t"));
    }
}
