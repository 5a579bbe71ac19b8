use anyhow::Context;
use deuda_core::{build_chart, identifier};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LookupArgs;
use crate::context::AppContext;
use crate::output::output_chart;

pub async fn handle(args: &LookupArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    // Invalid identifiers never reach the registry.
    let id = identifier::validate(&args.identifier)
        .with_context(|| format!("cannot look up '{}'", args.identifier))?;

    tracing::info!(identifier = %id, "looking up debtor history");

    let history = match ctx.registry.fetch_history(&id).await {
        Ok(history) => history,
        Err(error) => {
            let message = error.user_message();
            return Err(anyhow::Error::new(error).context(message));
        }
    };

    output_chart(&build_chart(&history), flags.format)
}
