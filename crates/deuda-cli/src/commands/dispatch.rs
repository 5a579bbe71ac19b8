use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Run commands that never reach the registry.
///
/// Returns `None` for commands that need an [`AppContext`].
pub fn dispatch_offline(command: &Commands, flags: &GlobalFlags) -> Option<anyhow::Result<()>> {
    match command {
        Commands::Check(args) => Some(commands::check::handle(args, flags)),
        Commands::Chart(args) => Some(commands::chart::handle(args, flags)),
        Commands::Situation(args) => Some(commands::situation::handle(args, flags)),
        Commands::Schema => Some(commands::schema::handle(flags)),
        Commands::Lookup(_) | Commands::Watch => None,
    }
}

/// Dispatch a registry command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Lookup(args) => commands::lookup::handle(&args, ctx, flags).await,
        Commands::Watch => commands::watch::handle(ctx, flags).await,
        Commands::Check(_) | Commands::Chart(_) | Commands::Situation(_) | Commands::Schema => {
            unreachable!("offline commands are pre-dispatched in main")
        }
    }
}
