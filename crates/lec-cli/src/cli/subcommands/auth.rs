use clap::Subcommand;

/// Authentication commands. Signing in happens through the identity
/// provider; these only inspect what it left behind.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Show current session status.
    Status,
}
