//! Syllables command: per-word estimates.

use std::io::Write;

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use readmetrics_core::syllables::{clean_word, count_syllables};

/// Arguments for the `syllables` subcommand.
#[derive(Args, Debug)]
pub struct SyllablesArgs {
    /// Words to estimate.
    #[arg(required = true)]
    pub words: Vec<String>,
}

#[derive(Debug, Serialize)]
struct WordSyllables {
    word: String,
    cleaned: String,
    syllables: usize,
}

/// Print the syllable estimate for each word.
#[instrument(name = "cmd_syllables", skip_all, fields(words = args.words.len()))]
pub fn cmd_syllables(args: SyllablesArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(words = ?args.words, "executing syllables command");

    let estimates = estimate(args.words);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&estimates)?);
        return Ok(());
    }

    write_estimates(&mut std::io::stdout().lock(), &estimates)?;
    Ok(())
}

fn estimate(words: Vec<String>) -> Vec<WordSyllables> {
    words
        .into_iter()
        .map(|word| WordSyllables {
            cleaned: clean_word(&word),
            syllables: count_syllables(&word),
            word,
        })
        .collect()
}

/// One line per word: the word padded to the longest, then its count.
fn write_estimates<W: Write>(out: &mut W, estimates: &[WordSyllables]) -> std::io::Result<()> {
    let width = estimates.iter().map(|e| e.word.len()).max().unwrap_or(0);
    for e in estimates {
        writeln!(out, "{:<width$}  {}", e.word, e.syllables.bold())?;
    }
    Ok(())
}
