//! Bookly CLI entry point.
//!
//! Binary name: `bookly`
//!
//! Parses CLI arguments, loads configuration and the saved session, then
//! dispatches to the appropriate command handler. The two dashboards
//! (`bookly client`, `bookly provider`) are interactive loops; the rest
//! are one-shot commands.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,bookly=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "bookly", &mut std::io::stdout());
        return Ok(());
    }

    // Load config and any saved session
    let mut state = AppState::init().await?;

    match cli.command {
        Commands::Login { email, password } => {
            cli::auth::login(&mut state, email, password, cli.json).await?;
        }

        Commands::Register {
            name,
            email,
            password,
            role,
        } => {
            cli::auth::register(&mut state, name, email, password, role, cli.json).await?;
        }

        Commands::Logout => {
            cli::auth::logout(&mut state, cli.json).await?;
        }

        Commands::Services => {
            cli::services::list_services(&state, cli.json).await?;
        }

        Commands::Client => {
            cli::client::run(&state, cli.json).await?;
        }

        Commands::Provider => {
            cli::provider::run(&state, cli.json).await?;
        }

        Commands::Status => {
            cli::status::status(&state, cli.json)?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
