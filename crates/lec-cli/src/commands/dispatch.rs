use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Me => commands::me::handle(ctx, flags).await,
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags),
        Commands::Course { action } => commands::course::handle(&action, ctx, flags).await,
        Commands::Enrollment { action } => {
            commands::enrollment::handle(&action, ctx, flags).await
        }
        Commands::Module { action } => commands::module::handle(&action, ctx, flags).await,
        Commands::Lesson { action } => commands::lesson::handle(&action, ctx, flags).await,
        Commands::Review { action } => commands::review::handle(&action, ctx, flags).await,
        Commands::Announcement { action } => {
            commands::announcement::handle(&action, ctx, flags).await
        }
    }
}
