//! Service catalog listing command.

use anyhow::Result;
use console::style;

use bookly_core::api::BookingApi;

use crate::cli::render::{services_table, spinner};
use crate::state::AppState;

/// List the service catalog.
pub async fn list_services(state: &AppState, json: bool) -> Result<()> {
    let api = state.api();
    let bar = spinner("Fetching services...");
    let services = api.list_services().await;
    bar.finish_and_clear();

    let services = match services {
        Ok(services) => services,
        Err(err) => {
            tracing::warn!(error = %err, "failed to fetch services");
            Vec::new()
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&services)?);
        return Ok(());
    }

    if services.is_empty() {
        println!();
        println!("  {} No services available.", style("i").blue().bold());
        println!();
        return Ok(());
    }

    println!();
    println!("  {}", style("Available Services").bold());
    println!();
    println!("{}", services_table(&services));
    println!();
    println!(
        "  {} service{}",
        style(services.len()).bold(),
        if services.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}
