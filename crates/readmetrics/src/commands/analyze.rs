//! Analyze command: full readability report for one file.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use readmetrics_core::batch::{self, AnalyzedUnit, SegmentId};
use readmetrics_core::{Readability, ReadabilityScores, Segmentation};

use super::read_input_file;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// How to split the file before scoring (overrides config).
    #[arg(long, value_enum)]
    pub segment: Option<Segmentation>,

    /// Also print the canonical text each score was computed from.
    #[arg(long)]
    pub show_text: bool,
}

/// Score every segment of a file and print a report.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config_segment: Segmentation,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let segmentation = args.segment.unwrap_or(config_segment);
    debug!(file = %args.file, segment = %segmentation, "executing analyze command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let units = batch::segment_units(args.file.as_str(), &content, segmentation);
    let results = batch::analyze_batch(units);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let multi = results.len() > 1;
    for AnalyzedUnit { id, readability } in &results {
        print_unit(id, readability, multi, args.show_text);
    }

    Ok(())
}

fn print_unit(id: &SegmentId, readability: &Readability, multi: bool, show_text: bool) {
    if multi {
        println!("{}", id.bold());
    } else {
        println!("{}", id.source.bold());
    }

    match readability {
        Readability::Empty { .. } => {
            println!("  {}", "no letters; nothing to score".yellow());
        }
        Readability::Computed(scores) => print_scores(scores),
    }

    if show_text {
        println!("  {} {}", "Text:".dimmed(), readability.clean_text());
    }
    println!();
}

fn print_scores(s: &ReadabilityScores) {
    println!(
        "  {} {} letters, {} words, {} sentences",
        "Counts:".cyan(),
        s.letter_count,
        s.word_count,
        s.sentence_count,
    );
    println!(
        "  {} {:.2} syllables/word, {:.2} words/sentence",
        "Averages:".cyan(),
        s.average_syllables_per_word,
        s.average_words_per_sentence,
    );
    println!(
        "  {} reading {}s, speaking {}s",
        "Time:".cyan(),
        s.reading_time_seconds,
        s.speaking_time_seconds,
    );
    println!("  {}", "Scores:".cyan());
    let rows = [
        ("Flesch-Kincaid Reading Ease", s.flesch_kincaid_reading_ease),
        ("Flesch-Kincaid Grade Level", s.flesch_kincaid_grade_level),
        ("Gunning-Fog", s.gunning_fog_score),
        ("Coleman-Liau", s.coleman_liau_index),
        ("SMOG", s.smog_index),
        ("Automated Readability Index", s.automated_readability_index),
    ];
    for (label, value) in rows {
        println!("    {label:<28} {value:>6.1}");
    }
}
