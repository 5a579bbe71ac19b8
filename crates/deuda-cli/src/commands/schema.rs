use deuda_core::ChartData;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    // Schemas are always printed as JSON.
    let format = match flags.format {
        OutputFormat::Raw => OutputFormat::Raw,
        OutputFormat::Json | OutputFormat::Table => OutputFormat::Json,
    };
    output(&ChartData::json_schema(), format)
}
