//! userctl - administrative CLI for a remote user identity service
//!
//! # Examples
//!
//! ```bash
//! # Update interactively (prompts with the current values as defaults)
//! userctl users update somebody
//!
//! # Scripted update, never prompts
//! userctl users update somebody --email new@example.com
//!
//! # Inspect accounts
//! userctl users show somebody --pretty
//! userctl users list
//! ```

mod cli;
mod commands;
mod user_commands;

use crate::{cli::Cli, commands::Commands, user_commands::UserCommands};

use userctl::{Client, ClientError, update};

use std::io;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Discover service URL: explicit flag > environment > error
    let server_url = match cli.server {
        Some(url) => url,
        None => discover_server_url(),
    };
    let token = cli.token.or_else(|| std::env::var("USERCTL_TOKEN").ok());

    let client = Client::new(&server_url, token.as_deref());

    let result = match cli.command {
        Commands::Users { action } => match action {
            UserCommands::Update {
                identifier,
                username,
                email,
            } => {
                let stdin = io::stdin();
                let mut input = stdin.lock();
                let mut output = io::stdout();
                let inputs = update::UpdateInputs { username, email };

                // The workflow writes its own confirmation to stdout.
                return match update::run(&client, &identifier, inputs, &mut input, &mut output)
                    .await
                {
                    Ok(_) => ExitCode::SUCCESS,
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        ExitCode::FAILURE
                    }
                };
            }
            UserCommands::Show { identifier } => client
                .user(&identifier)
                .await
                .and_then(|user| render_json(&user, cli.pretty)),
            UserCommands::List => client
                .list_users()
                .await
                .and_then(|users| render_json(&users, cli.pretty)),
        },
    };

    match result {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn render_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, ClientError> {
    let out = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    out.map_err(ClientError::from)
}

/// Resolve the identity service URL from the environment.
///
/// Falls back to a clear error telling the operator how to point the CLI at
/// a service.
fn discover_server_url() -> String {
    match std::env::var("USERCTL_URL") {
        Ok(url) if !url.is_empty() => url,
        _ => {
            eprintln!("Error: No identity service URL configured.");
            eprintln!();
            eprintln!("Specify the URL explicitly:");
            eprintln!("  userctl --server https://id.example.com users list");
            eprintln!();
            eprintln!("Or export it once per shell:");
            eprintln!("  export USERCTL_URL=https://id.example.com");
            std::process::exit(1);
        }
    }
}
