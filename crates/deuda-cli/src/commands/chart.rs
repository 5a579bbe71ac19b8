use std::path::Path;

use anyhow::Context;
use deuda_core::{ChartData, build_chart};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ChartArgs;
use crate::output::output_chart;

fn chart_from_file(path: &Path) -> anyhow::Result<ChartData> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let history = deuda_client::decode_history(&body)
        .with_context(|| format!("failed to decode registry response in {}", path.display()))?;
    Ok(build_chart(&history))
}

pub fn handle(args: &ChartArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output_chart(&chart_from_file(&args.file)?, flags.format)
}
