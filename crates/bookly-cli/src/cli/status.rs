//! Configuration and session status command.

use anyhow::Result;
use console::style;

use bookly_types::user::Role;

use crate::state::AppState;

/// Show where the client points and who is signed in.
pub fn status(state: &AppState, json: bool) -> Result<()> {
    if json {
        let status = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "base_url": state.config.base_url,
            "data_dir": state.data_dir.display().to_string(),
            "session": state.session.as_ref().map(|s| &s.user),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Bookly v{}",
        style("⚡").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();

    println!("  {}", style("── Backend ──").dim());
    println!("  URL:      {}", style(&state.config.base_url).cyan());
    println!("  Data dir: {}", state.data_dir.display());
    println!();

    println!("  {}", style("── Session ──").dim());
    match &state.session {
        Some(session) => {
            println!(
                "  Signed in as {} <{}> ({})",
                style(&session.user.name).cyan(),
                session.user.email,
                session.user.role
            );
            if session.user.role == Role::Provider {
                // Last value seen at sign-in; the dashboard shows live state.
                let available = session.user.is_available.unwrap_or(false);
                println!(
                    "  Availability at sign-in: {}",
                    if available {
                        style("available").green()
                    } else {
                        style("unavailable").yellow()
                    }
                );
            }
        }
        None => {
            println!(
                "  Not signed in. Run {} to get started.",
                style("bookly login").cyan()
            );
        }
    }
    println!();

    Ok(())
}
