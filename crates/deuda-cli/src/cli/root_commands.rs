use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Clean, format and validate an identifier without any lookup.
    Check(CheckArgs),
    /// Look up an identifier in the registry and print its chart series.
    Lookup(LookupArgs),
    /// Build chart series from a saved registry response.
    Chart(ChartArgs),
    /// Describe a situation code.
    Situation(SituationArgs),
    /// Read identifiers from stdin, one lookup in flight at a time.
    Watch,
    /// Print the JSON Schema of the chart output.
    Schema,
}

#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Identifier as typed, separators allowed (e.g. 20-12345678-6)
    pub input: String,
}

#[derive(Clone, Debug, Args)]
pub struct LookupArgs {
    /// Identifier as typed, separators allowed
    pub identifier: String,
}

#[derive(Clone, Debug, Args)]
pub struct ChartArgs {
    /// Path to a JSON registry response
    #[arg(long)]
    pub file: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct SituationArgs {
    /// Situation code reported by the registry
    #[arg(allow_negative_numbers = true)]
    pub code: i64,
}
