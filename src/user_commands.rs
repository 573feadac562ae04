use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// Update a user's username and/or email
    ///
    /// With no flags, prompts for both fields with the current values as
    /// defaults. With at least one flag, never prompts; the other field
    /// keeps its current value.
    Update {
        /// User to update (UUID or username)
        identifier: String,

        /// Specifies the new username for the user
        #[arg(short, long)]
        username: Option<String>,

        /// Specifies the new email address for the user
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Show a user by UUID or username
    Show {
        /// User to fetch (UUID or username)
        identifier: String,
    },

    /// List all users
    List,
}
