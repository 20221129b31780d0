//! Schema command: JSON Schema for machine consumers.

use clap::Args;
use tracing::{debug, instrument};

use readmetrics_core::ReadabilityRecord;

/// Arguments for the `schema` subcommand.
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {}

/// Print the JSON Schema describing one readability record.
///
/// Always JSON, regardless of `--json`.
#[instrument(name = "cmd_schema", skip_all)]
pub fn cmd_schema(_args: SchemaArgs) -> anyhow::Result<()> {
    debug!("executing schema command");
    let schema = schemars::schema_for!(ReadabilityRecord);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
