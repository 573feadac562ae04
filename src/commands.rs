use crate::user_commands::UserCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// User account operations
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },
}
