//! Normalize command: show canonical text.

use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use readmetrics_core::Segmentation;
use readmetrics_core::batch::{self, SegmentId};
use readmetrics_core::normalize::normalize;

use super::read_input_file;

/// Arguments for the `normalize` subcommand.
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// File to normalize.
    pub file: Utf8PathBuf,

    /// How to split the file first (overrides config).
    #[arg(long, value_enum)]
    pub segment: Option<Segmentation>,
}

#[derive(Serialize)]
struct NormalizedSegment {
    #[serde(flatten)]
    id: SegmentId,
    clean_text: String,
}

/// Print the canonical form of each segment, one per line.
#[instrument(name = "cmd_normalize", skip_all, fields(file = %args.file))]
pub fn cmd_normalize(
    args: NormalizeArgs,
    global_json: bool,
    config_segment: Segmentation,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let segmentation = args.segment.unwrap_or(config_segment);
    debug!(file = %args.file, segment = %segmentation, "executing normalize command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let segments: Vec<NormalizedSegment> =
        batch::segment_units(args.file.as_str(), &content, segmentation)
            .into_iter()
            .map(|unit| NormalizedSegment {
                clean_text: normalize(&unit.text),
                id: unit.id,
            })
            .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&segments)?);
    } else {
        for segment in &segments {
            println!("{}", segment.clean_text);
        }
    }

    Ok(())
}
