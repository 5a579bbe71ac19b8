use deuda_core::situation;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SituationArgs;
use crate::output::output;

pub fn handle(args: &SituationArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&situation::classify(args.code), flags.format)
}
