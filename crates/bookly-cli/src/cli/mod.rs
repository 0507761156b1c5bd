//! CLI command definitions and dispatch for the `bookly` binary.
//!
//! Uses clap derive macros for argument parsing. Commands are flat verbs:
//! auth (`login`, `register`, `logout`), the two dashboards (`client`,
//! `provider`), and read-only helpers (`services`, `status`).

pub mod auth;
pub mod client;
pub mod provider;
pub mod render;
pub mod services;
pub mod status;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Book services and manage your provider profile from the terminal.
#[derive(Parser)]
#[command(name = "bookly", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and save the session.
    Login {
        /// Email address (prompted for when omitted).
        #[arg(long)]
        email: Option<String>,

        /// Password (prompted for when omitted; prefer the prompt over
        /// putting passwords in shell history).
        #[arg(long)]
        password: Option<String>,
    },

    /// Create an account and sign in.
    Register {
        /// Display name (prompted for when omitted).
        #[arg(long)]
        name: Option<String>,

        /// Email address (prompted for when omitted).
        #[arg(long)]
        email: Option<String>,

        /// Password (prompted for when omitted).
        #[arg(long)]
        password: Option<String>,

        /// Account role: client or provider (prompted for when omitted).
        #[arg(long)]
        role: Option<String>,
    },

    /// Sign out and remove the saved session.
    Logout,

    /// List the service catalog.
    #[command(alias = "ls")]
    Services,

    /// Open the client dashboard (book services, view your bookings).
    Client,

    /// Open the provider dashboard (availability, offerings, appointments).
    Provider,

    /// Show configuration and session status.
    Status,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}
