use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "userctl")]
#[command(about = "Administrative CLI for a remote user identity service")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Identity service URL (or set USERCTL_URL)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Session token for authenticated calls (or set USERCTL_TOKEN)
    #[arg(long, global = true)]
    pub(crate) token: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
